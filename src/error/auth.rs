use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer` header was supplied on an authenticated
    /// endpoint. Results in 401, distinct from an invalid token.
    #[error("Missing bearer token")]
    MissingToken,

    /// The supplied token does not match any session row.
    /// Results in 401.
    #[error("Unknown session token")]
    InvalidToken,

    /// The session row exists but its expiry has passed.
    /// Results in 401 with a message telling the client to refresh.
    #[error("Session token expired")]
    ExpiredToken,

    /// Refresh was attempted on a token older than the maximum session
    /// age. The user must log in again. Results in 401.
    #[error("Session exceeded maximum renewal age")]
    SessionTooOld,

    /// CSRF state validation failed during the OAuth callback.
    ///
    /// The state in the callback URL does not match any stored, unexpired
    /// state row, indicating a forged or stale callback. Results in 400.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// The OAuth code exchange with Discord failed.
    #[error("OAuth token exchange failed: {0}")]
    TokenExchange(String),

    /// Discord reports the user is not a member of the guild.
    /// Denied with 403, distinct from a transport error.
    #[error("User {0} is not a member of guild {1}")]
    NotInGuild(String, String),

    /// The user holds none of the roles required for the access tier.
    /// Results in 403.
    #[error("User {0} denied: {1}")]
    AccessDenied(String, String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::MissingToken => (
                StatusCode::UNAUTHORIZED,
                "No se proporcionó el token de autenticación",
            ),
            Self::InvalidToken => (StatusCode::UNAUTHORIZED, "Token inválido"),
            Self::ExpiredToken => (StatusCode::UNAUTHORIZED, "El token ha expirado"),
            Self::SessionTooOld => (
                StatusCode::UNAUTHORIZED,
                "La sesión es demasiado antigua, inicia sesión de nuevo",
            ),
            Self::CsrfValidationFailed => (
                StatusCode::BAD_REQUEST,
                "Hubo un problema al iniciar sesión, inténtalo de nuevo",
            ),
            Self::TokenExchange(msg) => {
                tracing::error!("OAuth token exchange failed: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error interno del servidor",
                )
            }
            Self::NotInGuild(..) => (StatusCode::FORBIDDEN, "No perteneces al servidor"),
            Self::AccessDenied(user_id, reason) => {
                tracing::debug!("Access denied for {}: {}", user_id, reason);
                (
                    StatusCode::FORBIDDEN,
                    "No tienes permisos para realizar esta acción",
                )
            }
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
