use std::sync::Arc;
use std::time::Duration;

use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use serenity::http::Http;

use crate::{
    config::Config,
    error::AppError,
    state::{OAuth2Client, RoleConfigCache},
};

/// How long a cached per-guild tier union stays valid.
const ROLE_CACHE_TTL: Duration = Duration::from_secs(300);

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema is
/// up to date before any handler touches the database.
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the shared reqwest client.
///
/// Redirects are disabled so a redirecting external endpoint cannot be
/// used for SSRF through the OAuth or webhook calls.
pub fn setup_reqwest_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

/// Builds the OAuth2 client for the Discord authorization-code flow.
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    use crate::error::config::ConfigError;

    let client = BasicClient::new(ClientId::new(config.discord_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.discord_client_secret.clone()))
        .set_auth_uri(AuthUrl::new(config.discord_auth_url.clone()).map_err(ConfigError::from)?)
        .set_token_uri(TokenUrl::new(config.discord_token_url.clone()).map_err(ConfigError::from)?)
        .set_redirect_uri(
            RedirectUrl::new(config.discord_redirect_url.clone()).map_err(ConfigError::from)?,
        );

    Ok(client)
}

/// Builds the Discord REST client authenticated with the bot token.
pub fn setup_discord_http(config: &Config) -> Arc<Http> {
    Arc::new(Http::new(&config.discord_bot_token))
}

/// Builds the per-guild role-configuration cache.
pub fn setup_role_config_cache() -> RoleConfigCache {
    moka::future::Cache::builder()
        .time_to_live(ROLE_CACHE_TTL)
        .max_capacity(64)
        .build()
}
