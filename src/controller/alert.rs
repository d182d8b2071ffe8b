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
        alert::{AlertDto, CreateAlertParam},
        api::MessageDto,
        permission::AccessTier,
    },
    service::alert::AlertService,
    state::AppState,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAlertBody {
    pub mensaje: String,
    pub nivel: String,
}

/// GET /api/alertas/{guild} - Active alerts
///
/// Public: the landing page shows these without a session.
pub async fn list_active(
    State(state): State<AppState>,
    Path(guild_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let alerts = AlertService::new(&state.db).list_active(&guild_id).await?;
    let dtos: Vec<_> = alerts.into_iter().map(AlertDto::from_entity).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// POST /api/alertas/{guild} - Raise an alert
///
/// Medium tier.
pub async fn create(
    State(state): State<AppState>,
    Path(guild_id): Path<String>,
    token: BearerToken,
    Json(body): Json<CreateAlertBody>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db).require_user(&token).await?;
    state
        .permissions()
        .require(&guild_id, &user.discord_id, AccessTier::Medium)
        .await?;

    let alert = AlertService::new(&state.db)
        .create(CreateAlertParam {
            guild_id,
            mensaje: body.mensaje,
            nivel: body.nivel,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(AlertDto::from_entity(alert))))
}

/// POST /api/alertas/{guild}/{id}/resolver - Clear an active alert
///
/// Medium tier.
pub async fn resolve(
    State(state): State<AppState>,
    Path((guild_id, alert_id)): Path<(String, i32)>,
    token: BearerToken,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db).require_user(&token).await?;
    state
        .permissions()
        .require(&guild_id, &user.discord_id, AccessTier::Medium)
        .await?;

    AlertService::new(&state.db).resolve(&guild_id, alert_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Alerta resuelta".to_string(),
        }),
    ))
}
