use chrono::NaiveDateTime;
use serde::Serialize;

pub const ESTADO_PENDIENTE: &str = "pendiente";
pub const ESTADO_APROBADA: &str = "aprobada";

pub const TIPO_EMPRESA: &str = "empresa";
pub const TIPO_FACCION: &str = "faccion";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRequestDto {
    pub id: i32,
    pub discord_id: String,
    pub nombre: String,
    pub descripcion: String,
    pub tipo: String,
    pub link_discord: String,
    pub estado: String,
    pub revisor_id: Option<String>,
    pub revisor_rol: Option<String>,
    pub justificacion: Option<String>,
    pub fecha: NaiveDateTime,
}

impl CompanyRequestDto {
    pub fn from_entity(entity: entity::company_request::Model) -> Self {
        Self {
            id: entity.id,
            discord_id: entity.discord_id,
            nombre: entity.nombre,
            descripcion: entity.descripcion,
            tipo: entity.tipo,
            link_discord: entity.link_discord,
            estado: entity.estado,
            revisor_id: entity.revisor_id,
            revisor_rol: entity.revisor_rol,
            justificacion: entity.justificacion,
            fecha: entity.created_at,
        }
    }
}

/// Parameters for submitting a new company/faction request.
pub struct CreateCompanyRequestParam {
    pub guild_id: String,
    pub discord_id: String,
    pub nombre: String,
    pub descripcion: String,
    pub tipo: String,
    pub link_discord: String,
}

/// Parameters for approving or denying a pending request.
pub struct ReviewRequestParam {
    pub request_id: i32,
    pub revisor_id: String,
    pub revisor_rol: String,
    pub justificacion: String,
}

/// Review result: the primary mutation always committed; `notificado`
/// records whether the Discord DM made it out afterwards.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewOutcomeDto {
    pub estado: String,
    pub notificado: bool,
}
