//! Staff-profile repository: the profile row plus its append-only note
//! and warning sub-collections.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ExprTrait, QueryFilter, QueryOrder,
};

use crate::model::staff::AddStaffEntryParam;

/// Rank a profile starts at before an admin adjusts it.
const DEFAULT_RANGO: &str = "Aprendiz";

pub struct StaffRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StaffRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_profile(
        &self,
        guild_id: &str,
        discord_id: &str,
    ) -> Result<Option<entity::staff_profile::Model>, DbErr> {
        entity::prelude::StaffProfile::find_by_id((guild_id.to_string(), discord_id.to_string()))
            .one(self.db)
            .await
    }

    /// Creates the profile row if it does not exist yet. Counters start
    /// at zero so the atomic increments below always have a target row.
    pub async fn ensure_profile(&self, guild_id: &str, discord_id: &str) -> Result<(), DbErr> {
        entity::prelude::StaffProfile::insert(entity::staff_profile::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            discord_id: ActiveValue::Set(discord_id.to_string()),
            minutos_trabajados: ActiveValue::Set(0),
            rango: ActiveValue::Set(DEFAULT_RANGO.to_string()),
            valoracion: ActiveValue::Set(0),
            tickets: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        })
        .on_conflict(
            OnConflict::columns([
                entity::staff_profile::Column::GuildId,
                entity::staff_profile::Column::DiscordId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Adds worked minutes with an atomic in-place increment.
    pub async fn add_minutes(
        &self,
        guild_id: &str,
        discord_id: &str,
        minutes: i64,
    ) -> Result<(), DbErr> {
        entity::prelude::StaffProfile::update_many()
            .filter(entity::staff_profile::Column::GuildId.eq(guild_id))
            .filter(entity::staff_profile::Column::DiscordId.eq(discord_id))
            .col_expr(
                entity::staff_profile::Column::MinutosTrabajados,
                Expr::col(entity::staff_profile::Column::MinutosTrabajados).add(minutes),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Bumps the handled-ticket counter atomically.
    pub async fn increment_tickets(&self, guild_id: &str, discord_id: &str) -> Result<(), DbErr> {
        entity::prelude::StaffProfile::update_many()
            .filter(entity::staff_profile::Column::GuildId.eq(guild_id))
            .filter(entity::staff_profile::Column::DiscordId.eq(discord_id))
            .col_expr(
                entity::staff_profile::Column::Tickets,
                Expr::col(entity::staff_profile::Column::Tickets).add(1),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn add_note(
        &self,
        param: AddStaffEntryParam,
    ) -> Result<entity::staff_note::Model, DbErr> {
        entity::prelude::StaffNote::insert(entity::staff_note::ActiveModel {
            guild_id: ActiveValue::Set(param.guild_id),
            discord_id: ActiveValue::Set(param.discord_id),
            contenido: ActiveValue::Set(param.contenido),
            staff_id: ActiveValue::Set(param.staff_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    pub async fn add_warning(
        &self,
        param: AddStaffEntryParam,
    ) -> Result<entity::staff_warning::Model, DbErr> {
        entity::prelude::StaffWarning::insert(entity::staff_warning::ActiveModel {
            guild_id: ActiveValue::Set(param.guild_id),
            discord_id: ActiveValue::Set(param.discord_id),
            contenido: ActiveValue::Set(param.contenido),
            staff_id: ActiveValue::Set(param.staff_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    pub async fn get_notes(
        &self,
        guild_id: &str,
        discord_id: &str,
    ) -> Result<Vec<entity::staff_note::Model>, DbErr> {
        entity::prelude::StaffNote::find()
            .filter(entity::staff_note::Column::GuildId.eq(guild_id))
            .filter(entity::staff_note::Column::DiscordId.eq(discord_id))
            .order_by_asc(entity::staff_note::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn get_warnings(
        &self,
        guild_id: &str,
        discord_id: &str,
    ) -> Result<Vec<entity::staff_warning::Model>, DbErr> {
        entity::prelude::StaffWarning::find()
            .filter(entity::staff_warning::Column::GuildId.eq(guild_id))
            .filter(entity::staff_warning::Column::DiscordId.eq(discord_id))
            .order_by_asc(entity::staff_warning::Column::CreatedAt)
            .all(self.db)
            .await
    }
}
