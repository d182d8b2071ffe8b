use chrono::NaiveDateTime;
use serde::Serialize;

pub const TIPO_INE: &str = "ine";
pub const TIPO_PASAPORTE: &str = "pasaporte";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityDocumentDto {
    pub discord_id: String,
    pub tipo: String,
    pub nombre: String,
    pub apellidos: String,
    pub fecha_nacimiento: String,
    pub nacionalidad: String,
    pub sexo: String,
    pub aprobado: bool,
    pub documento_url: Option<String>,
    pub actualizado: NaiveDateTime,
}

impl IdentityDocumentDto {
    pub fn from_entity(entity: entity::identity_document::Model) -> Self {
        Self {
            discord_id: entity.discord_id,
            tipo: entity.tipo,
            nombre: entity.nombre,
            apellidos: entity.apellidos,
            fecha_nacimiento: entity.fecha_nacimiento,
            nacionalidad: entity.nacionalidad,
            sexo: entity.sexo,
            aprobado: entity.aprobado,
            documento_url: entity.documento_url,
            actualizado: entity.updated_at,
        }
    }
}

/// Parameters for creating or editing an identity document.
///
/// Edits reset the approval flag; a fresh review is required.
pub struct UpsertDocumentParam {
    pub guild_id: String,
    pub discord_id: String,
    pub tipo: String,
    pub nombre: String,
    pub apellidos: String,
    pub fecha_nacimiento: String,
    pub nacionalidad: String,
    pub sexo: String,
}
