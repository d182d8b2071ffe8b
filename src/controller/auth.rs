use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;

use crate::{
    error::AppError,
    middleware::auth::{AuthGuard, BearerToken},
    model::{auth::SessionDto, user::UserDto},
    service::auth::DiscordAuthService,
    state::AppState,
};

/// Query parameters for the OAuth callback endpoint.
#[derive(Deserialize)]
pub struct CallbackParams {
    /// CSRF state token, validated against the persisted value.
    pub state: String,
    /// Authorization code from Discord SSO for token exchange.
    pub code: String,
}

/// GET /api/auth/login - Begin the Discord OAuth flow
///
/// Generates the Discord authorize URL, persists its CSRF state
/// server-side, and redirects the browser to Discord.
pub async fn login(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let auth_service =
        DiscordAuthService::new(&state.db, &state.http_client, &state.oauth_client);

    let url = auth_service.login().await?;

    Ok(Redirect::temporary(url.as_ref()))
}

/// GET /api/auth/callback - Complete the Discord OAuth flow
///
/// Validates the CSRF state, exchanges the authorization code, upserts
/// the user, and returns a fresh bearer session token.
///
/// # Returns
/// - `200 OK`: SessionDto with the token, its expiry, and the user profile
/// - `400 Bad Request`: CSRF state unknown or expired
pub async fn callback(
    State(state): State<AppState>,
    params: Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service =
        DiscordAuthService::new(&state.db, &state.http_client, &state.oauth_client);

    let (session, user) = auth_service
        .callback(params.0.state, params.0.code)
        .await?;

    Ok((StatusCode::OK, Json(SessionDto::new(session, user))))
}

/// POST /api/auth/refresh - Exchange a token for a fresh one
///
/// The presented token row is deleted and a new one issued, unless the
/// session's original issue time is past the maximum age.
pub async fn refresh(
    State(state): State<AppState>,
    token: BearerToken,
) -> Result<impl IntoResponse, AppError> {
    let auth_service =
        DiscordAuthService::new(&state.db, &state.http_client, &state.oauth_client);

    let (session, user) = auth_service.refresh(&token.0).await?;

    Ok((StatusCode::OK, Json(SessionDto::new(session, user))))
}

/// POST /api/auth/logout - Invalidate the presented token
pub async fn logout(
    State(state): State<AppState>,
    token: BearerToken,
) -> Result<impl IntoResponse, AppError> {
    DiscordAuthService::new(&state.db, &state.http_client, &state.oauth_client)
        .logout(&token.0)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/auth/user - The authenticated user's profile
pub async fn get_user(
    State(state): State<AppState>,
    token: BearerToken,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db).require_user(&token).await?;

    Ok((StatusCode::OK, Json(UserDto::from_entity(user))))
}
