//! Discord REST gateways.
//!
//! Both traits exist so tier resolution and request review can be tested
//! without the Discord API behind them; the real implementations wrap the
//! serenity `Http` client authenticated with the bot token.

use std::sync::Arc;

use async_trait::async_trait;
use serenity::all::{GuildId, UserId};
use serenity::http::{Http, HttpError};

use crate::error::AppError;

/// Source of a member's current role list in a guild.
#[async_trait]
pub trait MemberRoleSource: Send + Sync {
    /// Fetches the member's role ids.
    ///
    /// # Returns
    /// - `Ok(Some(roles))` - Member found, possibly with no roles
    /// - `Ok(None)` - Discord reports the user is not in the guild
    /// - `Err(AppError)` - Transport or API error
    async fn member_roles(&self, guild_id: u64, user_id: u64)
        -> Result<Option<Vec<u64>>, AppError>;

    /// Fetches the guild owner's user id. Needed to bootstrap the role
    /// configuration of a guild that has no mappings yet.
    async fn guild_owner(&self, guild_id: u64) -> Result<u64, AppError>;
}

/// Delivery of direct messages to users.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send_dm(&self, user_id: u64, content: &str) -> Result<(), AppError>;
}

/// Member lookups against the live Discord REST API.
///
/// No caching here: role lists are fetched per request so revoked roles
/// take effect immediately.
pub struct DiscordMemberGateway {
    http: Arc<Http>,
}

impl DiscordMemberGateway {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl MemberRoleSource for DiscordMemberGateway {
    async fn member_roles(
        &self,
        guild_id: u64,
        user_id: u64,
    ) -> Result<Option<Vec<u64>>, AppError> {
        match self
            .http
            .get_member(GuildId::new(guild_id), UserId::new(user_id))
            .await
        {
            Ok(member) => Ok(Some(member.roles.iter().map(|role| role.get()).collect())),
            // 404 means "unknown member": denial, not a transport failure.
            Err(serenity::Error::Http(HttpError::UnsuccessfulRequest(response)))
                if response.status_code == reqwest::StatusCode::NOT_FOUND =>
            {
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn guild_owner(&self, guild_id: u64) -> Result<u64, AppError> {
        let guild = self.http.get_guild(GuildId::new(guild_id)).await?;
        Ok(guild.owner_id.get())
    }
}

/// DM delivery through the bot's Discord REST client.
pub struct DiscordNotifier {
    http: Arc<Http>,
}

impl DiscordNotifier {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Notifier for DiscordNotifier {
    async fn send_dm(&self, user_id: u64, content: &str) -> Result<(), AppError> {
        let channel = UserId::new(user_id).create_dm_channel(&self.http).await?;
        channel.id.say(&self.http, content).await?;
        Ok(())
    }
}
