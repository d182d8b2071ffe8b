//! Company/faction-request repository.
//!
//! `pendiente` is the only reviewable state. Approval and denial are
//! conditional statements filtered on it; a zero row count tells the
//! service the request was already reviewed by someone else.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::company::{CreateCompanyRequestParam, ESTADO_PENDIENTE};

pub struct CompanyRequestRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CompanyRequestRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        param: CreateCompanyRequestParam,
    ) -> Result<entity::company_request::Model, DbErr> {
        entity::prelude::CompanyRequest::insert(entity::company_request::ActiveModel {
            guild_id: ActiveValue::Set(param.guild_id),
            discord_id: ActiveValue::Set(param.discord_id),
            nombre: ActiveValue::Set(param.nombre),
            descripcion: ActiveValue::Set(param.descripcion),
            tipo: ActiveValue::Set(param.tipo),
            link_discord: ActiveValue::Set(param.link_discord),
            estado: ActiveValue::Set(ESTADO_PENDIENTE.to_string()),
            revisor_id: ActiveValue::Set(None),
            revisor_rol: ActiveValue::Set(None),
            justificacion: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            reviewed_at: ActiveValue::Set(None),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::company_request::Model>, DbErr> {
        entity::prelude::CompanyRequest::find_by_id(id).one(self.db).await
    }

    /// Whether the user already has a pending request in this guild.
    pub async fn has_pending(&self, guild_id: &str, discord_id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::CompanyRequest::find()
            .filter(entity::company_request::Column::GuildId.eq(guild_id))
            .filter(entity::company_request::Column::DiscordId.eq(discord_id))
            .filter(entity::company_request::Column::Estado.eq(ESTADO_PENDIENTE))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn list_pending(
        &self,
        guild_id: &str,
    ) -> Result<Vec<entity::company_request::Model>, DbErr> {
        entity::prelude::CompanyRequest::find()
            .filter(entity::company_request::Column::GuildId.eq(guild_id))
            .filter(entity::company_request::Column::Estado.eq(ESTADO_PENDIENTE))
            .order_by_asc(entity::company_request::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn list_by_user(
        &self,
        guild_id: &str,
        discord_id: &str,
    ) -> Result<Vec<entity::company_request::Model>, DbErr> {
        entity::prelude::CompanyRequest::find()
            .filter(entity::company_request::Column::GuildId.eq(guild_id))
            .filter(entity::company_request::Column::DiscordId.eq(discord_id))
            .order_by_desc(entity::company_request::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Transitions a pending request to approved in place, recording the
    /// reviewer and justification.
    ///
    /// # Returns
    /// - `Ok(true)` - Request was pending and is now approved
    /// - `Ok(false)` - Request was not pending (already reviewed or gone)
    pub async fn approve(
        &self,
        id: i32,
        new_estado: &str,
        revisor_id: &str,
        revisor_rol: &str,
        justificacion: &str,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::CompanyRequest::update_many()
            .filter(entity::company_request::Column::Id.eq(id))
            .filter(entity::company_request::Column::Estado.eq(ESTADO_PENDIENTE))
            .col_expr(entity::company_request::Column::Estado, Expr::value(new_estado))
            .col_expr(
                entity::company_request::Column::RevisorId,
                Expr::value(revisor_id),
            )
            .col_expr(
                entity::company_request::Column::RevisorRol,
                Expr::value(revisor_rol),
            )
            .col_expr(
                entity::company_request::Column::Justificacion,
                Expr::value(justificacion),
            )
            .col_expr(
                entity::company_request::Column::ReviewedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes a pending request (denial).
    ///
    /// # Returns
    /// - `Ok(true)` - Request was pending and is now deleted
    /// - `Ok(false)` - Request was not pending
    pub async fn delete_pending(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::CompanyRequest::delete_many()
            .filter(entity::company_request::Column::Id.eq(id))
            .filter(entity::company_request::Column::Estado.eq(ESTADO_PENDIENTE))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
