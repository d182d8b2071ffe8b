//! Role-configuration repository.

use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};

pub struct RoleConfigRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoleConfigRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads every named-role mapping configured for a guild.
    ///
    /// An empty result is a valid state meaning "no access configured".
    pub async fn get_mappings(
        &self,
        guild_id: &str,
    ) -> Result<Vec<entity::role_config::Model>, DbErr> {
        entity::prelude::RoleConfig::find()
            .filter(entity::role_config::Column::GuildId.eq(guild_id))
            .all(self.db)
            .await
    }

    /// Sets the Discord role id for one named role in a guild.
    pub async fn upsert(
        &self,
        guild_id: &str,
        role_name: &str,
        discord_role_id: &str,
    ) -> Result<(), DbErr> {
        entity::prelude::RoleConfig::insert(entity::role_config::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            role_name: ActiveValue::Set(role_name.to_string()),
            discord_role_id: ActiveValue::Set(discord_role_id.to_string()),
        })
        .on_conflict(
            OnConflict::columns([
                entity::role_config::Column::GuildId,
                entity::role_config::Column::RoleName,
            ])
            .update_column(entity::role_config::Column::DiscordRoleId)
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }
}
