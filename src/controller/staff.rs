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
        permission::AccessTier,
        staff::{AddStaffEntryParam, StaffEntryDto, StaffProfileDto},
    },
    service::staff::StaffService,
    state::AppState,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddMinutesBody {
    pub minutos: i64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryBody {
    pub contenido: String,
}

/// GET /api/staff/{guild}/{user} - Full staff profile
///
/// Medium tier. Returns the counters plus notes and warnings.
pub async fn get_profile(
    State(state): State<AppState>,
    Path((guild_id, discord_id)): Path<(String, String)>,
    token: BearerToken,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db).require_user(&token).await?;
    state
        .permissions()
        .require(&guild_id, &user.discord_id, AccessTier::Medium)
        .await?;

    let profile = StaffService::new(&state.db)
        .get_profile(&guild_id, &discord_id)
        .await?;

    Ok((StatusCode::OK, Json(profile)))
}

/// POST /api/staff/{guild}/{user}/tiempo - Add worked minutes
pub async fn add_minutes(
    State(state): State<AppState>,
    Path((guild_id, discord_id)): Path<(String, String)>,
    token: BearerToken,
    Json(body): Json<AddMinutesBody>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db).require_user(&token).await?;
    state
        .permissions()
        .require(&guild_id, &user.discord_id, AccessTier::Medium)
        .await?;

    let profile = StaffService::new(&state.db)
        .add_minutes(&guild_id, &discord_id, body.minutos)
        .await?;

    Ok((
        StatusCode::OK,
        Json(StaffProfileDto::from_entity(profile, Vec::new(), Vec::new())),
    ))
}

/// POST /api/staff/{guild}/{user}/tickets - Bump the handled-ticket counter
pub async fn increment_tickets(
    State(state): State<AppState>,
    Path((guild_id, discord_id)): Path<(String, String)>,
    token: BearerToken,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db).require_user(&token).await?;
    state
        .permissions()
        .require(&guild_id, &user.discord_id, AccessTier::Medium)
        .await?;

    let profile = StaffService::new(&state.db)
        .increment_tickets(&guild_id, &discord_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(StaffProfileDto::from_entity(profile, Vec::new(), Vec::new())),
    ))
}

/// POST /api/staff/{guild}/{user}/notas - Append a note
///
/// Medium tier. The acting staff member is taken from the session.
pub async fn add_note(
    State(state): State<AppState>,
    Path((guild_id, discord_id)): Path<(String, String)>,
    token: BearerToken,
    Json(body): Json<EntryBody>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db).require_user(&token).await?;
    state
        .permissions()
        .require(&guild_id, &user.discord_id, AccessTier::Medium)
        .await?;

    let note = StaffService::new(&state.db)
        .add_note(AddStaffEntryParam {
            guild_id,
            discord_id,
            contenido: body.contenido,
            staff_id: user.discord_id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(StaffEntryDto::from_note(note))))
}

/// POST /api/staff/{guild}/{user}/advertencias - Append a warning
///
/// WarnManage tier: only admins and moderators may warn.
pub async fn add_warning(
    State(state): State<AppState>,
    Path((guild_id, discord_id)): Path<(String, String)>,
    token: BearerToken,
    Json(body): Json<EntryBody>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db).require_user(&token).await?;
    state
        .permissions()
        .require(&guild_id, &user.discord_id, AccessTier::WarnManage)
        .await?;

    let warning = StaffService::new(&state.db)
        .add_warning(AddStaffEntryParam {
            guild_id,
            discord_id,
            contenido: body.contenido,
            staff_id: user.discord_id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(StaffEntryDto::from_warning(warning))))
}
