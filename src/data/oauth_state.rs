//! CSRF-state repository for the OAuth flow.
//!
//! States are single-use: the callback consumes the row in the same
//! statement that validates it, so a replayed state never matches twice.

use chrono::{Duration, Utc};
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};

/// How long a handed-out authorize URL stays valid.
const STATE_TTL_MINUTES: i64 = 10;

pub struct OauthStateRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OauthStateRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, state: &str) -> Result<(), DbErr> {
        let now = Utc::now().naive_utc();

        // Every login hit inserts a state row but only completed callbacks
        // consume one, so abandoned rows are swept here.
        entity::prelude::OauthState::delete_many()
            .filter(entity::oauth_state::Column::ExpiresAt.lt(now))
            .exec(self.db)
            .await?;

        entity::prelude::OauthState::insert(entity::oauth_state::ActiveModel {
            state: ActiveValue::Set(state.to_string()),
            created_at: ActiveValue::Set(now),
            expires_at: ActiveValue::Set(now + Duration::minutes(STATE_TTL_MINUTES)),
            ..Default::default()
        })
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Deletes the state row if it exists and has not expired.
    ///
    /// # Returns
    /// - `Ok(true)` - State was valid and is now consumed
    /// - `Ok(false)` - Unknown or expired state
    pub async fn consume(&self, state: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::OauthState::delete_many()
            .filter(entity::oauth_state::Column::State.eq(state))
            .filter(entity::oauth_state::Column::ExpiresAt.gt(Utc::now().naive_utc()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
