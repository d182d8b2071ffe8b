//! Tier-based authorization.
//!
//! Resolution is: load the guild's role configuration (through a TTL
//! cache), precompute the tier unions, fetch the member's live role list
//! from Discord, and intersect. An absent configuration denies rather
//! than errors; a member missing from the guild denies with its own
//! message, distinct from a transport failure.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{
    data::role_config::RoleConfigRepository,
    error::{auth::AuthError, AppError},
    model::permission::{AccessTier, RoleMapping, TierSets},
    service::discord::{DiscordMemberGateway, MemberRoleSource},
    state::{AppState, RoleConfigCache},
    util::parse::parse_snowflake,
};

pub struct PermissionService<'a, M: MemberRoleSource> {
    db: &'a DatabaseConnection,
    cache: &'a RoleConfigCache,
    members: M,
}

impl AppState {
    /// Permission service wired to the live Discord gateway.
    pub fn permissions(&self) -> PermissionService<'_, DiscordMemberGateway> {
        PermissionService::new(
            &self.db,
            &self.role_cache,
            DiscordMemberGateway::new(self.discord_http.clone()),
        )
    }
}

impl<'a, M: MemberRoleSource> PermissionService<'a, M> {
    pub fn new(db: &'a DatabaseConnection, cache: &'a RoleConfigCache, members: M) -> Self {
        Self { db, cache, members }
    }

    /// Loads a guild's role mappings from the database.
    ///
    /// Rows whose role id does not parse as a snowflake are skipped with
    /// a warning instead of poisoning the whole configuration.
    async fn load_mappings(&self, guild_id: &str) -> Result<Vec<RoleMapping>, AppError> {
        let rows = RoleConfigRepository::new(self.db)
            .get_mappings(guild_id)
            .await?;

        let mut mappings = Vec::with_capacity(rows.len());
        for row in rows {
            match row.discord_role_id.parse::<u64>() {
                Ok(id) => mappings.push(RoleMapping {
                    role_name: row.role_name,
                    discord_role_id: id,
                }),
                Err(_) => {
                    tracing::warn!(
                        "Ignoring role config row '{}' in guild {}: bad role id '{}'",
                        row.role_name,
                        guild_id,
                        row.discord_role_id
                    );
                }
            }
        }

        Ok(mappings)
    }

    /// Tier unions for a guild, served from the TTL cache when possible.
    async fn tier_sets(&self, guild_id: &str) -> Result<Arc<TierSets>, AppError> {
        if let Some(sets) = self.cache.get(guild_id).await {
            return Ok(sets);
        }

        let mappings = self.load_mappings(guild_id).await?;
        let sets = Arc::new(TierSets::from_mappings(&mappings));
        self.cache.insert(guild_id.to_string(), sets.clone()).await;

        Ok(sets)
    }

    /// Drops the cached unions for a guild after its configuration changed.
    pub async fn invalidate(&self, guild_id: &str) {
        self.cache.invalidate(guild_id).await;
    }

    /// The member's live role list; denies when Discord says the user is
    /// not in the guild.
    async fn member_roles(&self, guild_id: &str, discord_id: &str) -> Result<Vec<u64>, AppError> {
        let guild = parse_snowflake(guild_id)?;
        let user = parse_snowflake(discord_id)?;

        match self.members.member_roles(guild, user).await? {
            Some(roles) => Ok(roles),
            None => {
                Err(AuthError::NotInGuild(discord_id.to_string(), guild_id.to_string()).into())
            }
        }
    }

    /// Requires the user to hold at least one role of the tier's union.
    pub async fn require(
        &self,
        guild_id: &str,
        discord_id: &str,
        tier: AccessTier,
    ) -> Result<(), AppError> {
        let sets = self.tier_sets(guild_id).await?;
        let roles = self.member_roles(guild_id, discord_id).await?;

        if sets.allows(tier, &roles) {
            Ok(())
        } else {
            Err(AuthError::AccessDenied(
                discord_id.to_string(),
                format!("missing roles for tier {:?} in guild {}", tier, guild_id),
            )
            .into())
        }
    }

    /// Requires the right to edit a guild's role configuration.
    ///
    /// A configured guild requires the Admin tier. A guild with no
    /// mappings yet would deny everyone, so the guild owner is allowed
    /// through to seed the first mapping.
    pub async fn require_config_editor(
        &self,
        guild_id: &str,
        discord_id: &str,
    ) -> Result<(), AppError> {
        let sets = self.tier_sets(guild_id).await?;

        if !sets.is_empty() {
            return self.require(guild_id, discord_id, AccessTier::Admin).await;
        }

        let guild = parse_snowflake(guild_id)?;
        let user = parse_snowflake(discord_id)?;

        if self.members.guild_owner(guild).await? == user {
            Ok(())
        } else {
            Err(AuthError::AccessDenied(
                discord_id.to_string(),
                format!(
                    "guild {} has no role configuration; only the owner can bootstrap it",
                    guild_id
                ),
            )
            .into())
        }
    }

    /// Requires reviewer access and returns the display label derived
    /// from the specific reviewer role held.
    pub async fn require_reviewer(
        &self,
        guild_id: &str,
        discord_id: &str,
    ) -> Result<&'static str, AppError> {
        let sets = self.tier_sets(guild_id).await?;
        let roles = self.member_roles(guild_id, discord_id).await?;

        sets.reviewer_label(&roles).ok_or_else(|| {
            AuthError::AccessDenied(
                discord_id.to_string(),
                format!("not a request reviewer in guild {}", guild_id),
            )
            .into()
        })
    }
}
