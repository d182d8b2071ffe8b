//! Identity-document repository.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::model::ine::UpsertDocumentParam;

pub struct IdentityRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> IdentityRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find(
        &self,
        guild_id: &str,
        discord_id: &str,
    ) -> Result<Option<entity::identity_document::Model>, DbErr> {
        entity::prelude::IdentityDocument::find_by_id((
            guild_id.to_string(),
            discord_id.to_string(),
        ))
        .one(self.db)
        .await
    }

    /// Creates or rewrites the user's document. Any edit clears the
    /// approval flag and the issued-card URL; a fresh review is required.
    pub async fn upsert(
        &self,
        param: UpsertDocumentParam,
    ) -> Result<entity::identity_document::Model, DbErr> {
        let now = Utc::now().naive_utc();

        entity::prelude::IdentityDocument::insert(entity::identity_document::ActiveModel {
            guild_id: ActiveValue::Set(param.guild_id),
            discord_id: ActiveValue::Set(param.discord_id),
            tipo: ActiveValue::Set(param.tipo),
            nombre: ActiveValue::Set(param.nombre),
            apellidos: ActiveValue::Set(param.apellidos),
            fecha_nacimiento: ActiveValue::Set(param.fecha_nacimiento),
            nacionalidad: ActiveValue::Set(param.nacionalidad),
            sexo: ActiveValue::Set(param.sexo),
            aprobado: ActiveValue::Set(false),
            documento_url: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        })
        .on_conflict(
            OnConflict::columns([
                entity::identity_document::Column::GuildId,
                entity::identity_document::Column::DiscordId,
            ])
            .update_columns([
                entity::identity_document::Column::Tipo,
                entity::identity_document::Column::Nombre,
                entity::identity_document::Column::Apellidos,
                entity::identity_document::Column::FechaNacimiento,
                entity::identity_document::Column::Nacionalidad,
                entity::identity_document::Column::Sexo,
                entity::identity_document::Column::Aprobado,
                entity::identity_document::Column::DocumentoUrl,
                entity::identity_document::Column::UpdatedAt,
            ])
            .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }

    /// Approves a document.
    ///
    /// # Returns
    /// - `Ok(true)` - Document existed and is now approved
    /// - `Ok(false)` - No document for that user
    pub async fn approve(&self, guild_id: &str, discord_id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::IdentityDocument::update_many()
            .filter(entity::identity_document::Column::GuildId.eq(guild_id))
            .filter(entity::identity_document::Column::DiscordId.eq(discord_id))
            .col_expr(
                entity::identity_document::Column::Aprobado,
                Expr::value(true),
            )
            .col_expr(
                entity::identity_document::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Records the issued-card URL, but only on an approved document.
    ///
    /// # Returns
    /// - `Ok(true)` - Document was approved; URL stored
    /// - `Ok(false)` - Document missing or not approved
    pub async fn set_document_url(
        &self,
        guild_id: &str,
        discord_id: &str,
        url: &str,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::IdentityDocument::update_many()
            .filter(entity::identity_document::Column::GuildId.eq(guild_id))
            .filter(entity::identity_document::Column::DiscordId.eq(discord_id))
            .filter(entity::identity_document::Column::Aprobado.eq(true))
            .col_expr(
                entity::identity_document::Column::DocumentoUrl,
                Expr::value(url),
            )
            .col_expr(
                entity::identity_document::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
