//! Session-token repository.

use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};

pub struct SessionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SessionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a freshly issued token row.
    pub async fn create(
        &self,
        discord_id: &str,
        token: &str,
        issued_at: NaiveDateTime,
        expires_at: NaiveDateTime,
    ) -> Result<entity::session::Model, DbErr> {
        entity::prelude::Session::insert(entity::session::ActiveModel {
            token: ActiveValue::Set(token.to_string()),
            discord_id: ActiveValue::Set(discord_id.to_string()),
            issued_at: ActiveValue::Set(issued_at),
            expires_at: ActiveValue::Set(expires_at),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    pub async fn find_by_token(
        &self,
        token: &str,
    ) -> Result<Option<entity::session::Model>, DbErr> {
        entity::prelude::Session::find()
            .filter(entity::session::Column::Token.eq(token))
            .one(self.db)
            .await
    }

    /// Deletes a token row. Returns whether a row existed.
    pub async fn delete_by_token(&self, token: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Session::delete_many()
            .filter(entity::session::Column::Token.eq(token))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Removes rows whose expiry has passed. Expired tokens are rejected
    /// on presentation but their rows would otherwise accumulate forever;
    /// this runs opportunistically whenever a new token is issued.
    pub async fn purge_expired(&self) -> Result<u64, DbErr> {
        let result = entity::prelude::Session::delete_many()
            .filter(entity::session::Column::ExpiresAt.lt(Utc::now().naive_utc()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
