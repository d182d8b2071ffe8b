use crate::error::{config::ConfigError, AppError};

const DISCORD_AUTH_URL: &str = "https://discord.com/oauth2/authorize";
const DISCORD_TOKEN_URL: &str = "https://discord.com/api/oauth2/token";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,

    pub discord_client_id: String,
    pub discord_client_secret: String,
    pub discord_redirect_url: String,
    pub discord_bot_token: String,

    pub news_webhook_url: String,

    pub discord_auth_url: String,
    pub discord_token_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: require("DATABASE_URL")?,
            bind_addr: std::env::var("BIND_ADDR")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            discord_client_id: require("DISCORD_CLIENT_ID")?,
            discord_client_secret: require("DISCORD_CLIENT_SECRET")?,
            discord_redirect_url: require("DISCORD_REDIRECT_URL")?,
            discord_bot_token: require("DISCORD_BOT_TOKEN")?,
            news_webhook_url: require("NEWS_WEBHOOK_URL")?,
            discord_auth_url: DISCORD_AUTH_URL.to_string(),
            discord_token_url: DISCORD_TOKEN_URL.to_string(),
        })
    }
}

fn require(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}
