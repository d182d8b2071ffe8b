//! Identity-document business logic.

use sea_orm::DatabaseConnection;

use crate::{
    data::ine::IdentityRepository,
    error::AppError,
    model::ine::{UpsertDocumentParam, TIPO_INE, TIPO_PASAPORTE},
};

const MSG_MISSING_FIELDS: &str = "Todos los campos son requeridos";
const MSG_INVALID_TIPO: &str = "El tipo debe ser 'ine' o 'pasaporte'";
const MSG_DOCUMENT_NOT_FOUND: &str = "No se encontró el documento de identidad";
const MSG_NOT_APPROVED: &str = "El documento no está aprobado";

pub struct IdentityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> IdentityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_document(
        &self,
        guild_id: &str,
        discord_id: &str,
    ) -> Result<entity::identity_document::Model, AppError> {
        IdentityRepository::new(self.db)
            .find(guild_id, discord_id)
            .await?
            .ok_or_else(|| AppError::NotFound(MSG_DOCUMENT_NOT_FOUND.to_string()))
    }

    /// Creates or edits the user's document. Any edit drops the approval
    /// flag and the issued-card URL.
    pub async fn upsert(
        &self,
        param: UpsertDocumentParam,
    ) -> Result<entity::identity_document::Model, AppError> {
        if param.nombre.trim().is_empty()
            || param.apellidos.trim().is_empty()
            || param.fecha_nacimiento.trim().is_empty()
            || param.nacionalidad.trim().is_empty()
            || param.sexo.trim().is_empty()
        {
            return Err(AppError::BadRequest(MSG_MISSING_FIELDS.to_string()));
        }

        if param.tipo != TIPO_INE && param.tipo != TIPO_PASAPORTE {
            return Err(AppError::BadRequest(MSG_INVALID_TIPO.to_string()));
        }

        Ok(IdentityRepository::new(self.db).upsert(param).await?)
    }

    pub async fn approve(
        &self,
        guild_id: &str,
        discord_id: &str,
    ) -> Result<entity::identity_document::Model, AppError> {
        let repo = IdentityRepository::new(self.db);

        if !repo.approve(guild_id, discord_id).await? {
            return Err(AppError::NotFound(MSG_DOCUMENT_NOT_FOUND.to_string()));
        }

        self.get_document(guild_id, discord_id).await
    }

    /// Records the rendered-card URL on an approved document. Approval is
    /// enforced inside the conditional update, so a concurrent edit that
    /// resets the flag cannot slip an issued card through.
    pub async fn issue(
        &self,
        guild_id: &str,
        discord_id: &str,
        documento_url: &str,
    ) -> Result<entity::identity_document::Model, AppError> {
        if documento_url.trim().is_empty() {
            return Err(AppError::BadRequest(MSG_MISSING_FIELDS.to_string()));
        }

        let repo = IdentityRepository::new(self.db);

        if !repo
            .set_document_url(guild_id, discord_id, documento_url)
            .await?
        {
            // Distinguish missing document from not-yet-approved.
            return match repo.find(guild_id, discord_id).await? {
                Some(_) => Err(AppError::BadRequest(MSG_NOT_APPROVED.to_string())),
                None => Err(AppError::NotFound(MSG_DOCUMENT_NOT_FOUND.to_string())),
            };
        }

        self.get_document(guild_id, discord_id).await
    }
}
