//! Server-alert repository.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::alert::CreateAlertParam;

pub struct AlertRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AlertRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        param: CreateAlertParam,
    ) -> Result<entity::server_alert::Model, DbErr> {
        entity::prelude::ServerAlert::insert(entity::server_alert::ActiveModel {
            guild_id: ActiveValue::Set(param.guild_id),
            mensaje: ActiveValue::Set(param.mensaje),
            nivel: ActiveValue::Set(param.nivel),
            activo: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    pub async fn list_active(
        &self,
        guild_id: &str,
    ) -> Result<Vec<entity::server_alert::Model>, DbErr> {
        entity::prelude::ServerAlert::find()
            .filter(entity::server_alert::Column::GuildId.eq(guild_id))
            .filter(entity::server_alert::Column::Activo.eq(true))
            .order_by_desc(entity::server_alert::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Clears an active alert.
    ///
    /// # Returns
    /// - `Ok(true)` - Alert was active and is now resolved
    /// - `Ok(false)` - No matching active alert
    pub async fn resolve(&self, guild_id: &str, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::ServerAlert::update_many()
            .filter(entity::server_alert::Column::Id.eq(id))
            .filter(entity::server_alert::Column::GuildId.eq(guild_id))
            .filter(entity::server_alert::Column::Activo.eq(true))
            .col_expr(entity::server_alert::Column::Activo, Expr::value(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
