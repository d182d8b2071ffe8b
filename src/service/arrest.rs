//! Antecedentes business logic.

use sea_orm::DatabaseConnection;

use crate::{
    data::arrest::ArrestRepository,
    error::AppError,
    model::arrest::{ArrestRecordDto, NewArrestParam},
};

const MSG_EMPTY_MOTIVO: &str = "El motivo del arresto es requerido";
const MSG_INVALID_DURATION: &str = "La duración debe ser mayor que cero";
const MSG_ENTRY_NOT_FOUND: &str = "No se encontró un arresto activo con ese identificador";
const MSG_RECORD_MISSING: &str = "No se pudo leer el registro de antecedentes";

pub struct ArrestService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArrestService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Full antecedentes view. A user with no record gets a zeroed view,
    /// never a 404.
    pub async fn get_record(
        &self,
        guild_id: &str,
        discord_id: &str,
    ) -> Result<ArrestRecordDto, AppError> {
        let repo = ArrestRepository::new(self.db);

        let Some(record) = repo.find_record(guild_id, discord_id).await? else {
            return Ok(ArrestRecordDto::empty(discord_id.to_string()));
        };

        let entries = repo.get_entries(guild_id, discord_id).await?;

        Ok(ArrestRecordDto::from_entity(record, entries))
    }

    /// Registers an arrest: appends the entry, bumps the aggregate total
    /// and re-derives the dangerous flag, then returns the updated view.
    pub async fn register(&self, param: NewArrestParam) -> Result<ArrestRecordDto, AppError> {
        if param.motivo.trim().is_empty() {
            return Err(AppError::BadRequest(MSG_EMPTY_MOTIVO.to_string()));
        }
        if param.duracion_minutos <= 0 {
            return Err(AppError::BadRequest(MSG_INVALID_DURATION.to_string()));
        }

        let guild_id = param.guild_id.clone();
        let discord_id = param.discord_id.clone();

        let repo = ArrestRepository::new(self.db);
        repo.ensure_record(&guild_id, &discord_id).await?;
        repo.insert_entry(param).await?;
        repo.increment_total(&guild_id, &discord_id).await?;

        let Some(record) = repo.find_record(&guild_id, &discord_id).await? else {
            return Err(AppError::InternalError(MSG_RECORD_MISSING.to_string()));
        };
        let entries = repo.get_entries(&guild_id, &discord_id).await?;

        Ok(ArrestRecordDto::from_entity(record, entries))
    }

    /// Marks an arrest entry as served. The aggregate total is historic
    /// and stays untouched.
    pub async fn serve_entry(
        &self,
        guild_id: &str,
        discord_id: &str,
        entry_id: i32,
    ) -> Result<(), AppError> {
        let deactivated = ArrestRepository::new(self.db)
            .deactivate_entry(guild_id, discord_id, entry_id)
            .await?;

        if deactivated {
            Ok(())
        } else {
            Err(AppError::NotFound(MSG_ENTRY_NOT_FOUND.to_string()))
        }
    }
}
