use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrestEntryDto {
    pub id: i32,
    pub motivo: String,
    pub oficial_id: String,
    pub duracion_minutos: i32,
    pub activo: bool,
    pub fecha: NaiveDateTime,
}

impl ArrestEntryDto {
    pub fn from_entity(entity: entity::arrest_entry::Model) -> Self {
        Self {
            id: entity.id,
            motivo: entity.motivo,
            oficial_id: entity.oficial_id,
            duracion_minutos: entity.duracion_minutos,
            activo: entity.activo,
            fecha: entity.created_at,
        }
    }
}

/// Full antecedentes view: aggregate counters plus every entry.
///
/// A user who was never arrested gets a zeroed record, not a 404.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrestRecordDto {
    pub discord_id: String,
    pub total_arrestos: i32,
    pub usuario_peligroso: bool,
    pub arrestos: Vec<ArrestEntryDto>,
}

impl ArrestRecordDto {
    pub fn from_entity(
        record: entity::arrest_record::Model,
        entries: Vec<entity::arrest_entry::Model>,
    ) -> Self {
        Self {
            discord_id: record.discord_id,
            total_arrestos: record.total_arrestos,
            usuario_peligroso: record.usuario_peligroso,
            arrestos: entries.into_iter().map(ArrestEntryDto::from_entity).collect(),
        }
    }

    pub fn empty(discord_id: String) -> Self {
        Self {
            discord_id,
            total_arrestos: 0,
            usuario_peligroso: false,
            arrestos: Vec::new(),
        }
    }
}

/// Parameters for registering a new arrest.
pub struct NewArrestParam {
    pub guild_id: String,
    pub discord_id: String,
    pub motivo: String,
    pub oficial_id: String,
    pub duracion_minutos: i32,
}
