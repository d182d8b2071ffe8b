//! Application state shared across all request handlers.
//!
//! `AppState` holds every shared resource the handlers need. It is built
//! once during startup and cloned cheaply per request through Axum's state
//! extraction; nothing here is a module-level singleton, so handlers stay
//! testable in isolation.

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;
use serenity::http::Http;
use std::sync::Arc;

use crate::model::permission::TierSets;

/// Type alias for the OAuth2 client configured for Discord authentication.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Read-through TTL cache of precomputed tier unions, keyed by guild id.
pub type RoleConfigCache = moka::future::Cache<String, Arc<TierSets>>;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `reqwest::Client` uses an `Arc` internally
/// - `OAuth2Client` is designed to be cloned
/// - `Arc<Http>` is a reference-counted pointer
/// - the moka cache clones share one store
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for external API requests: the Discord user-profile
    /// fetch during OAuth and incoming-webhook delivery.
    pub http_client: reqwest::Client,

    /// OAuth2 client for the Discord authentication flow.
    pub oauth_client: OAuth2Client,

    /// Discord REST client authenticated with the bot token. Used for
    /// guild-membership lookups and DM delivery.
    pub discord_http: Arc<Http>,

    /// Per-guild tier-union cache with a fixed TTL; a miss triggers a
    /// role-configuration read and repopulates the entry.
    pub role_cache: RoleConfigCache,

    /// Discord incoming-webhook URL for news publishing.
    pub news_webhook_url: String,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        discord_http: Arc<Http>,
        role_cache: RoleConfigCache,
        news_webhook_url: String,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            discord_http,
            role_cache,
            news_webhook_url,
        }
    }
}
