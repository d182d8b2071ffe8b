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
        api::MessageDto,
        arrest::NewArrestParam,
        permission::AccessTier,
    },
    service::arrest::ArrestService,
    state::AppState,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterArrestBody {
    pub motivo: String,
    pub duracion_minutos: i32,
}

/// GET /api/antecedentes/{guild}/{user} - Full antecedentes view
///
/// Police tier. A user with no record gets a zeroed view, not a 404.
pub async fn get_record(
    State(state): State<AppState>,
    Path((guild_id, discord_id)): Path<(String, String)>,
    token: BearerToken,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db).require_user(&token).await?;
    state
        .permissions()
        .require(&guild_id, &user.discord_id, AccessTier::Police)
        .await?;

    let record = ArrestService::new(&state.db)
        .get_record(&guild_id, &discord_id)
        .await?;

    Ok((StatusCode::OK, Json(record)))
}

/// POST /api/antecedentes/{guild}/{user} - Register an arrest
///
/// Police tier. The acting officer is the session user. The aggregate
/// total and the dangerous flag update atomically with the entry.
pub async fn register(
    State(state): State<AppState>,
    Path((guild_id, discord_id)): Path<(String, String)>,
    token: BearerToken,
    Json(body): Json<RegisterArrestBody>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db).require_user(&token).await?;
    state
        .permissions()
        .require(&guild_id, &user.discord_id, AccessTier::Police)
        .await?;

    let record = ArrestService::new(&state.db)
        .register(NewArrestParam {
            guild_id,
            discord_id,
            motivo: body.motivo,
            oficial_id: user.discord_id,
            duracion_minutos: body.duracion_minutos,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(record)))
}

/// POST /api/antecedentes/{guild}/{user}/{entry}/cumplir - Mark served
///
/// Police tier. Clears `activo` on one entry; the historic total stays.
pub async fn serve_entry(
    State(state): State<AppState>,
    Path((guild_id, discord_id, entry_id)): Path<(String, String, i32)>,
    token: BearerToken,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db).require_user(&token).await?;
    state
        .permissions()
        .require(&guild_id, &user.discord_id, AccessTier::Police)
        .await?;

    ArrestService::new(&state.db)
        .serve_entry(&guild_id, &discord_id, entry_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Arresto marcado como cumplido".to_string(),
        }),
    ))
}
