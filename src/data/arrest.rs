//! Antecedentes repository: arrest entries plus the aggregate record.
//!
//! The dangerous-user flag is derived inside the same UPDATE that bumps
//! the total, so concurrent arrests cannot leave the flag stale: SET
//! expressions all read the pre-update row, making the increment and the
//! threshold comparison one atomic step.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ExprTrait, QueryFilter, QueryOrder,
};

use crate::model::arrest::NewArrestParam;

/// A user becomes "peligroso" once their total strictly exceeds this.
pub const DANGEROUS_THRESHOLD: i32 = 5;

pub struct ArrestRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArrestRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_record(
        &self,
        guild_id: &str,
        discord_id: &str,
    ) -> Result<Option<entity::arrest_record::Model>, DbErr> {
        entity::prelude::ArrestRecord::find_by_id((guild_id.to_string(), discord_id.to_string()))
            .one(self.db)
            .await
    }

    pub async fn get_entries(
        &self,
        guild_id: &str,
        discord_id: &str,
    ) -> Result<Vec<entity::arrest_entry::Model>, DbErr> {
        entity::prelude::ArrestEntry::find()
            .filter(entity::arrest_entry::Column::GuildId.eq(guild_id))
            .filter(entity::arrest_entry::Column::DiscordId.eq(discord_id))
            .order_by_desc(entity::arrest_entry::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Appends an arrest entry. The aggregate record is updated separately
    /// via `increment_total`.
    pub async fn insert_entry(
        &self,
        param: NewArrestParam,
    ) -> Result<entity::arrest_entry::Model, DbErr> {
        entity::prelude::ArrestEntry::insert(entity::arrest_entry::ActiveModel {
            guild_id: ActiveValue::Set(param.guild_id),
            discord_id: ActiveValue::Set(param.discord_id),
            motivo: ActiveValue::Set(param.motivo),
            oficial_id: ActiveValue::Set(param.oficial_id),
            duracion_minutos: ActiveValue::Set(param.duracion_minutos),
            activo: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    /// Creates the zeroed aggregate record if missing.
    pub async fn ensure_record(&self, guild_id: &str, discord_id: &str) -> Result<(), DbErr> {
        entity::prelude::ArrestRecord::insert(entity::arrest_record::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            discord_id: ActiveValue::Set(discord_id.to_string()),
            total_arrestos: ActiveValue::Set(0),
            usuario_peligroso: ActiveValue::Set(false),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        })
        .on_conflict(
            OnConflict::columns([
                entity::arrest_record::Column::GuildId,
                entity::arrest_record::Column::DiscordId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Atomically bumps the arrest total and re-derives the dangerous
    /// flag: `usuario_peligroso = (total + 1) > DANGEROUS_THRESHOLD`.
    pub async fn increment_total(&self, guild_id: &str, discord_id: &str) -> Result<(), DbErr> {
        entity::prelude::ArrestRecord::update_many()
            .filter(entity::arrest_record::Column::GuildId.eq(guild_id))
            .filter(entity::arrest_record::Column::DiscordId.eq(discord_id))
            .col_expr(
                entity::arrest_record::Column::TotalArrestos,
                Expr::col(entity::arrest_record::Column::TotalArrestos).add(1),
            )
            .col_expr(
                entity::arrest_record::Column::UsuarioPeligroso,
                Expr::col(entity::arrest_record::Column::TotalArrestos)
                    .add(1)
                    .gt(DANGEROUS_THRESHOLD),
            )
            .col_expr(
                entity::arrest_record::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Marks one arrest entry as served.
    ///
    /// # Returns
    /// - `Ok(true)` - Entry existed in this record and was active
    /// - `Ok(false)` - No matching active entry
    pub async fn deactivate_entry(
        &self,
        guild_id: &str,
        discord_id: &str,
        entry_id: i32,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::ArrestEntry::update_many()
            .filter(entity::arrest_entry::Column::Id.eq(entry_id))
            .filter(entity::arrest_entry::Column::GuildId.eq(guild_id))
            .filter(entity::arrest_entry::Column::DiscordId.eq(discord_id))
            .filter(entity::arrest_entry::Column::Activo.eq(true))
            .col_expr(entity::arrest_entry::Column::Activo, Expr::value(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
