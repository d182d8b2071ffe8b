//! Bearer-token extraction and session authentication.
//!
//! `BearerToken` pulls the token out of the `Authorization` header and
//! rejects requests without one; `AuthGuard` resolves a token to its user,
//! distinguishing a missing token from an invalid or expired one. Role-tier
//! checks live in `service::permission`, since they need the Discord API.

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    data::{session::SessionRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
};

/// Opaque session token taken from `Authorization: Bearer <token>`.
pub struct BearerToken(pub String);

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(value) = parts.headers.get(header::AUTHORIZATION) else {
            return Err(AuthError::MissingToken.into());
        };

        let value = value.to_str().map_err(|_| AuthError::MissingToken)?;
        let token = value
            .strip_prefix("Bearer ")
            .ok_or(AuthError::MissingToken)?;

        if token.is_empty() {
            return Err(AuthError::MissingToken.into());
        }

        Ok(Self(token.to_string()))
    }
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves a bearer token to its user.
    ///
    /// An unknown token and an expired one are rejected with distinct
    /// errors; both map to 401. The user id returned is always the id the
    /// token was issued for.
    pub async fn require_user(
        &self,
        token: &BearerToken,
    ) -> Result<entity::user::Model, AppError> {
        let session_repo = SessionRepository::new(self.db);
        let user_repo = UserRepository::new(self.db);

        let Some(session) = session_repo.find_by_token(&token.0).await? else {
            return Err(AuthError::InvalidToken.into());
        };

        if session.expires_at < Utc::now().naive_utc() {
            return Err(AuthError::ExpiredToken.into());
        }

        let Some(user) = user_repo.find_by_discord_id(&session.discord_id).await? else {
            // Session rows are deleted with their user, so this is a bug.
            return Err(AuthError::InvalidToken.into());
        };

        Ok(user)
    }
}
