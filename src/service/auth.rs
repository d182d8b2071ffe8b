//! Discord OAuth2 login and bearer-session management.

use chrono::{Duration, Utc};
use oauth2::{
    basic::BasicTokenType, AuthorizationCode, CsrfToken, EmptyExtraTokenFields, Scope,
    StandardTokenResponse, TokenResponse,
};
use rand::{distr::Alphanumeric, Rng};
use sea_orm::DatabaseConnection;
use serenity::all::User as DiscordUser;
use url::Url;

use crate::{
    data::{oauth_state::OauthStateRepository, session::SessionRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::user::UpsertUserParam,
    state::OAuth2Client,
};

/// Issued tokens are valid this long before a refresh is needed.
const TOKEN_TTL_HOURS: i64 = 24;
/// Refresh is refused once the original issue time is this far back.
const MAX_SESSION_AGE_DAYS: i64 = 30;

const TOKEN_LENGTH: usize = 48;

pub struct DiscordAuthService<'a> {
    db: &'a DatabaseConnection,
    http_client: &'a reqwest::Client,
    oauth_client: &'a OAuth2Client,
}

impl<'a> DiscordAuthService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
        }
    }

    /// Builds the Discord authorize URL and persists its CSRF state.
    pub async fn login(&self) -> Result<Url, AppError> {
        let (authorize_url, csrf_state) = self
            .oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("identify".to_string()))
            .url();

        OauthStateRepository::new(self.db)
            .create(csrf_state.secret())
            .await?;

        Ok(authorize_url)
    }

    /// Completes the OAuth flow: validates the CSRF state, exchanges the
    /// code, fetches the Discord profile, upserts the user, and issues a
    /// bearer session token.
    pub async fn callback(
        &self,
        state: String,
        authorization_code: String,
    ) -> Result<(entity::session::Model, entity::user::Model), AppError> {
        if !OauthStateRepository::new(self.db).consume(&state).await? {
            return Err(AuthError::CsrfValidationFailed.into());
        }

        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(authorization_code))
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

        let discord_user = self.fetch_discord_user(&token).await?;

        let user = UserRepository::new(self.db)
            .upsert(UpsertUserParam {
                discord_id: discord_user.id.get().to_string(),
                name: discord_user.name.clone(),
                avatar_hash: discord_user.avatar.map(|hash| hash.to_string()),
            })
            .await?;

        let session = self.issue_session(&user.discord_id).await?;

        Ok((session, user))
    }

    /// Re-issues a token, provided the presented one is not excessively
    /// old. The old row is deleted so the token cannot be reused.
    pub async fn refresh(
        &self,
        token: &str,
    ) -> Result<(entity::session::Model, entity::user::Model), AppError> {
        let session_repo = SessionRepository::new(self.db);

        let Some(session) = session_repo.find_by_token(token).await? else {
            return Err(AuthError::InvalidToken.into());
        };

        let max_age = Duration::days(MAX_SESSION_AGE_DAYS);
        if Utc::now().naive_utc() - session.issued_at > max_age {
            session_repo.delete_by_token(token).await?;
            return Err(AuthError::SessionTooOld.into());
        }

        let Some(user) = UserRepository::new(self.db)
            .find_by_discord_id(&session.discord_id)
            .await?
        else {
            return Err(AuthError::InvalidToken.into());
        };

        session_repo.delete_by_token(token).await?;
        let new_session = self.issue_session(&session.discord_id).await?;

        Ok((new_session, user))
    }

    pub async fn logout(&self, token: &str) -> Result<(), AppError> {
        SessionRepository::new(self.db).delete_by_token(token).await?;
        Ok(())
    }

    /// Creates a fresh opaque token row for a user.
    pub async fn issue_session(
        &self,
        discord_id: &str,
    ) -> Result<entity::session::Model, AppError> {
        let token: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(TOKEN_LENGTH)
            .map(char::from)
            .collect();

        let session_repo = SessionRepository::new(self.db);
        session_repo.purge_expired().await?;

        let now = Utc::now().naive_utc();
        let session = session_repo
            .create(discord_id, &token, now, now + Duration::hours(TOKEN_TTL_HOURS))
            .await?;

        Ok(session)
    }

    /// Retrieves the Discord profile using the freshly exchanged token.
    async fn fetch_discord_user(
        &self,
        token: &StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    ) -> Result<DiscordUser, AppError> {
        let access_token = token.access_token().secret();

        let user_info = self
            .http_client
            .get("https://discord.com/api/users/@me")
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await?
            .json::<DiscordUser>()
            .await?;

        Ok(user_info)
    }
}

#[cfg(test)]
mod test {
    use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
    use test_utils::{builder::TestBuilder, factory::user::create_user_with_id};

    use super::*;

    /// Refresh and logout never touch the OAuth endpoints, so dummy URLs
    /// are enough to satisfy the client's typestate.
    fn oauth_client() -> OAuth2Client {
        BasicClient::new(ClientId::new("client-id".to_string()))
            .set_client_secret(ClientSecret::new("client-secret".to_string()))
            .set_auth_uri(AuthUrl::new("https://discord.test/authorize".to_string()).unwrap())
            .set_token_uri(TokenUrl::new("https://discord.test/token".to_string()).unwrap())
            .set_redirect_uri(
                RedirectUrl::new("https://dashboard.test/callback".to_string()).unwrap(),
            )
    }

    /// A refresh hands out a fresh token and retires the presented one.
    #[tokio::test]
    async fn refresh_rotates_token() {
        let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        create_user_with_id(db, "42").await.unwrap();

        let http = reqwest::Client::new();
        let oauth = oauth_client();
        let service = DiscordAuthService::new(db, &http, &oauth);

        let old = service.issue_session("42").await.unwrap();
        let (new_session, user) = service.refresh(&old.token).await.unwrap();

        assert_eq!(user.discord_id, "42");
        assert_ne!(new_session.token, old.token);
        assert!(SessionRepository::new(db)
            .find_by_token(&old.token)
            .await
            .unwrap()
            .is_none());
    }

    /// A session issued past the maximum age cannot be refreshed; the row
    /// is removed so the token cannot be retried.
    #[tokio::test]
    async fn refresh_rejects_old_session() {
        let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        create_user_with_id(db, "42").await.unwrap();

        let now = Utc::now().naive_utc();
        SessionRepository::new(db)
            .create(
                "42",
                "tok-ancient",
                now - Duration::days(MAX_SESSION_AGE_DAYS + 1),
                now + Duration::hours(1),
            )
            .await
            .unwrap();

        let http = reqwest::Client::new();
        let oauth = oauth_client();
        let service = DiscordAuthService::new(db, &http, &oauth);

        let result = service.refresh("tok-ancient").await;

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::SessionTooOld))
        ));
        assert!(SessionRepository::new(db)
            .find_by_token("tok-ancient")
            .await
            .unwrap()
            .is_none());
    }

    /// Refreshing a token that was never issued fails like any other bad
    /// token.
    #[tokio::test]
    async fn refresh_rejects_unknown_token() {
        let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let http = reqwest::Client::new();
        let oauth = oauth_client();
        let service = DiscordAuthService::new(db, &http, &oauth);

        let result = service.refresh("tok-forged").await;

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::InvalidToken))
        ));
    }
}
