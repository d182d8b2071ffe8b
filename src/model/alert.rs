use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertDto {
    pub id: i32,
    pub mensaje: String,
    pub nivel: String,
    pub activo: bool,
    pub fecha: NaiveDateTime,
}

impl AlertDto {
    pub fn from_entity(entity: entity::server_alert::Model) -> Self {
        Self {
            id: entity.id,
            mensaje: entity.mensaje,
            nivel: entity.nivel,
            activo: entity.activo,
            fecha: entity.created_at,
        }
    }
}

/// Parameters for raising a new guild alert.
pub struct CreateAlertParam {
    pub guild_id: String,
    pub mensaje: String,
    pub nivel: String,
}
