use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    error::AppError,
    middleware::auth::{AuthGuard, BearerToken},
    model::{
        company::{CompanyRequestDto, CreateCompanyRequestParam, ReviewRequestParam},
        permission::AccessTier,
    },
    service::{company::CompanyService, discord::DiscordNotifier},
    state::AppState,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequestBody {
    pub guild_id: String,
    pub nombre: String,
    pub descripcion: String,
    pub tipo: String,
    pub link_discord: String,
}

#[derive(Deserialize)]
pub struct GuildQuery {
    pub guild: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewBody {
    pub justificacion: String,
}

fn service(state: &AppState) -> CompanyService<'_, DiscordNotifier> {
    CompanyService::new(&state.db, DiscordNotifier::new(state.discord_http.clone()))
}

/// POST /api/empresas - Submit a company or faction request
///
/// Authenticated. Every field is required; one pending request per user
/// and guild.
///
/// # Returns
/// - `201 Created`: CompanyRequestDto in estado "pendiente"
/// - `400 Bad Request`: Missing fields or unknown tipo
/// - `409 Conflict`: A pending request already exists
pub async fn create(
    State(state): State<AppState>,
    token: BearerToken,
    Json(body): Json<CreateRequestBody>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db).require_user(&token).await?;

    let request = service(&state)
        .create(CreateCompanyRequestParam {
            guild_id: body.guild_id,
            discord_id: user.discord_id,
            nombre: body.nombre,
            descripcion: body.descripcion,
            tipo: body.tipo,
            link_discord: body.link_discord,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CompanyRequestDto::from_entity(request)),
    ))
}

/// GET /api/empresas/pendientes?guild= - Pending requests for review
///
/// High tier (admins, moderators, support).
pub async fn list_pending(
    State(state): State<AppState>,
    Query(query): Query<GuildQuery>,
    token: BearerToken,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db).require_user(&token).await?;
    state
        .permissions()
        .require(&query.guild, &user.discord_id, AccessTier::High)
        .await?;

    let requests = service(&state).list_pending(&query.guild).await?;
    let dtos: Vec<_> = requests
        .into_iter()
        .map(CompanyRequestDto::from_entity)
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /api/empresas/mias?guild= - The authenticated user's own requests
pub async fn list_mine(
    State(state): State<AppState>,
    Query(query): Query<GuildQuery>,
    token: BearerToken,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db).require_user(&token).await?;

    let requests = service(&state)
        .list_by_user(&query.guild, &user.discord_id)
        .await?;
    let dtos: Vec<_> = requests
        .into_iter()
        .map(CompanyRequestDto::from_entity)
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// POST /api/empresas/{id}/aprobar - Approve a pending request
///
/// Reviewer only (Admin/Mod/Soporte); the label recorded on the request
/// comes from the specific role the reviewer holds. The applicant is
/// DMed after the state transition commits.
///
/// # Returns
/// - `200 OK`: ReviewOutcomeDto; `notificado` reports DM delivery
/// - `404 Not Found`: No such request
/// - `409 Conflict`: Request was no longer pending
pub async fn approve(
    State(state): State<AppState>,
    Path(request_id): Path<i32>,
    token: BearerToken,
    Json(body): Json<ReviewBody>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db).require_user(&token).await?;

    let company_service = service(&state);
    let request = company_service.find(request_id).await?;

    let revisor_rol = state
        .permissions()
        .require_reviewer(&request.guild_id, &user.discord_id)
        .await?;

    let outcome = company_service
        .approve(ReviewRequestParam {
            request_id,
            revisor_id: user.discord_id,
            revisor_rol: revisor_rol.to_string(),
            justificacion: body.justificacion,
        })
        .await?;

    Ok((StatusCode::OK, Json(outcome)))
}

/// POST /api/empresas/{id}/denegar - Deny and delete a pending request
///
/// Reviewer only. The request row is removed; the applicant is DMed the
/// justification after the delete commits.
pub async fn deny(
    State(state): State<AppState>,
    Path(request_id): Path<i32>,
    token: BearerToken,
    Json(body): Json<ReviewBody>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db).require_user(&token).await?;

    let company_service = service(&state);
    let request = company_service.find(request_id).await?;

    let revisor_rol = state
        .permissions()
        .require_reviewer(&request.guild_id, &user.discord_id)
        .await?;

    let outcome = company_service
        .deny(ReviewRequestParam {
            request_id,
            revisor_id: user.discord_id,
            revisor_rol: revisor_rol.to_string(),
            justificacion: body.justificacion,
        })
        .await?;

    Ok((StatusCode::OK, Json(outcome)))
}
