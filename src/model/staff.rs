use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffEntryDto {
    pub id: i32,
    pub contenido: String,
    pub staff_id: String,
    pub fecha: NaiveDateTime,
}

impl StaffEntryDto {
    pub fn from_note(entity: entity::staff_note::Model) -> Self {
        Self {
            id: entity.id,
            contenido: entity.contenido,
            staff_id: entity.staff_id,
            fecha: entity.created_at,
        }
    }

    pub fn from_warning(entity: entity::staff_warning::Model) -> Self {
        Self {
            id: entity.id,
            contenido: entity.contenido,
            staff_id: entity.staff_id,
            fecha: entity.created_at,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffProfileDto {
    pub discord_id: String,
    pub minutos_trabajados: i64,
    pub rango: String,
    pub valoracion: i32,
    pub tickets: i32,
    pub notas: Vec<StaffEntryDto>,
    pub advertencias: Vec<StaffEntryDto>,
}

impl StaffProfileDto {
    pub fn from_entity(
        profile: entity::staff_profile::Model,
        notes: Vec<entity::staff_note::Model>,
        warnings: Vec<entity::staff_warning::Model>,
    ) -> Self {
        Self {
            discord_id: profile.discord_id,
            minutos_trabajados: profile.minutos_trabajados,
            rango: profile.rango,
            valoracion: profile.valoracion,
            tickets: profile.tickets,
            notas: notes.into_iter().map(StaffEntryDto::from_note).collect(),
            advertencias: warnings
                .into_iter()
                .map(StaffEntryDto::from_warning)
                .collect(),
        }
    }
}

/// Parameters for appending a note or warning to a staff profile.
pub struct AddStaffEntryParam {
    pub guild_id: String,
    pub discord_id: String,
    pub contenido: String,
    pub staff_id: String,
}
