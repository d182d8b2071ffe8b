//! Role-configuration factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts one named-role mapping for a guild.
pub async fn create_role_mapping(
    db: &DatabaseConnection,
    guild_id: &str,
    role_name: &str,
    discord_role_id: &str,
) -> Result<entity::role_config::Model, DbErr> {
    entity::role_config::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.to_string()),
        role_name: ActiveValue::Set(role_name.to_string()),
        discord_role_id: ActiveValue::Set(discord_role_id.to_string()),
    }
    .insert(db)
    .await
}
