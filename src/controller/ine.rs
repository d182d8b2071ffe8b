use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    error::AppError,
    middleware::auth::{AuthGuard, BearerToken},
    model::{
        ine::{IdentityDocumentDto, UpsertDocumentParam},
        permission::AccessTier,
    },
    service::ine::IdentityService,
    state::AppState,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertDocumentBody {
    pub guild_id: String,
    pub tipo: String,
    pub nombre: String,
    pub apellidos: String,
    pub fecha_nacimiento: String,
    pub nacionalidad: String,
    pub sexo: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueBody {
    pub documento_url: String,
}

/// POST /api/ine - Create or edit the user's own identity document
///
/// Authenticated. Any edit resets the approval flag and drops a
/// previously issued card URL.
pub async fn upsert(
    State(state): State<AppState>,
    token: BearerToken,
    Json(body): Json<UpsertDocumentBody>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db).require_user(&token).await?;

    let document = IdentityService::new(&state.db)
        .upsert(UpsertDocumentParam {
            guild_id: body.guild_id,
            discord_id: user.discord_id,
            tipo: body.tipo,
            nombre: body.nombre,
            apellidos: body.apellidos,
            fecha_nacimiento: body.fecha_nacimiento,
            nacionalidad: body.nacionalidad,
            sexo: body.sexo,
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(IdentityDocumentDto::from_entity(document)),
    ))
}

/// GET /api/ine/{guild}/{user} - Fetch an identity document
///
/// The owner can always read their own document; anyone else needs
/// Medium tier.
pub async fn get_document(
    State(state): State<AppState>,
    Path((guild_id, discord_id)): Path<(String, String)>,
    token: BearerToken,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db).require_user(&token).await?;

    if user.discord_id != discord_id {
        state
            .permissions()
            .require(&guild_id, &user.discord_id, AccessTier::Medium)
            .await?;
    }

    let document = IdentityService::new(&state.db)
        .get_document(&guild_id, &discord_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(IdentityDocumentDto::from_entity(document)),
    ))
}

/// POST /api/ine/{guild}/{user}/aprobar - Approve a document
///
/// Medium tier.
pub async fn approve(
    State(state): State<AppState>,
    Path((guild_id, discord_id)): Path<(String, String)>,
    token: BearerToken,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db).require_user(&token).await?;
    state
        .permissions()
        .require(&guild_id, &user.discord_id, AccessTier::Medium)
        .await?;

    let document = IdentityService::new(&state.db)
        .approve(&guild_id, &discord_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(IdentityDocumentDto::from_entity(document)),
    ))
}

/// POST /api/ine/{guild}/{user}/emitir - Record the issued-card URL
///
/// Medium tier, approved documents only.
pub async fn issue(
    State(state): State<AppState>,
    Path((guild_id, discord_id)): Path<(String, String)>,
    token: BearerToken,
    Json(body): Json<IssueBody>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db).require_user(&token).await?;
    state
        .permissions()
        .require(&guild_id, &user.discord_id, AccessTier::Medium)
        .await?;

    let document = IdentityService::new(&state.db)
        .issue(&guild_id, &discord_id, &body.documento_url)
        .await?;

    Ok((
        StatusCode::OK,
        Json(IdentityDocumentDto::from_entity(document)),
    ))
}
