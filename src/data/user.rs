//! User repository.
//!
//! Users are created or refreshed at OAuth-callback time and keyed by
//! their Discord snowflake.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::model::user::UpsertUserParam;

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user or refreshes the name and avatar of an existing
    /// one. Called on every successful login.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created or updated user
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn upsert(&self, param: UpsertUserParam) -> Result<entity::user::Model, DbErr> {
        entity::prelude::User::insert(entity::user::ActiveModel {
            discord_id: ActiveValue::Set(param.discord_id),
            name: ActiveValue::Set(param.name),
            avatar_hash: ActiveValue::Set(param.avatar_hash),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::DiscordId)
                .update_columns([
                    entity::user::Column::Name,
                    entity::user::Column::AvatarHash,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }

    /// Finds a user by their Discord ID.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - User found
    /// - `Ok(None)` - No user with that Discord ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_discord_id(
        &self,
        discord_id: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(discord_id.to_string())
            .one(self.db)
            .await
    }
}
