use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{
    data::role_config::RoleConfigRepository,
    error::AppError,
    middleware::auth::{AuthGuard, BearerToken},
    model::permission::NAMED_ROLES,
    state::AppState,
};

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleMappingBody {
    pub role_name: String,
    pub discord_role_id: String,
}

/// GET /api/config/roles/{guild} - Named-role mappings for a guild
///
/// Admin tier; on an unconfigured guild the owner is allowed so the
/// configuration can be seeded at all.
pub async fn get_roles(
    State(state): State<AppState>,
    Path(guild_id): Path<String>,
    token: BearerToken,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db).require_user(&token).await?;
    state
        .permissions()
        .require_config_editor(&guild_id, &user.discord_id)
        .await?;

    let mappings = RoleConfigRepository::new(&state.db)
        .get_mappings(&guild_id)
        .await?;
    let dtos: Vec<_> = mappings
        .into_iter()
        .map(|row| RoleMappingBody {
            role_name: row.role_name,
            discord_role_id: row.discord_role_id,
        })
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// PUT /api/config/roles/{guild} - Set one named-role mapping
///
/// Admin tier, or the guild owner while the guild has no mappings yet.
/// The cached tier unions for the guild are dropped so the change takes
/// effect on the next request instead of after the TTL.
pub async fn put_role(
    State(state): State<AppState>,
    Path(guild_id): Path<String>,
    token: BearerToken,
    Json(body): Json<RoleMappingBody>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db).require_user(&token).await?;
    state
        .permissions()
        .require_config_editor(&guild_id, &user.discord_id)
        .await?;

    if !NAMED_ROLES.contains(&body.role_name.as_str()) {
        return Err(AppError::BadRequest(format!(
            "Rol desconocido '{}', debe ser uno de: {}",
            body.role_name,
            NAMED_ROLES.join(", ")
        )));
    }

    body.discord_role_id
        .parse::<u64>()
        .map_err(|_| AppError::BadRequest("El id del rol de Discord no es válido".to_string()))?;

    RoleConfigRepository::new(&state.db)
        .upsert(&guild_id, &body.role_name, &body.discord_role_id)
        .await?;
    state.permissions().invalidate(&guild_id).await;

    Ok((StatusCode::OK, Json(body)))
}
