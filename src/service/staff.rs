//! Staff-profile business logic.

use sea_orm::DatabaseConnection;

use crate::{
    data::staff::StaffRepository,
    error::AppError,
    model::staff::{AddStaffEntryParam, StaffProfileDto},
};

const MSG_PROFILE_NOT_FOUND: &str = "No se encontró el perfil de staff";
const MSG_EMPTY_CONTENT: &str = "El contenido no puede estar vacío";
const MSG_INVALID_MINUTES: &str = "Los minutos deben ser mayores que cero";

pub struct StaffService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StaffService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Full profile view: the counters plus notes and warnings.
    pub async fn get_profile(
        &self,
        guild_id: &str,
        discord_id: &str,
    ) -> Result<StaffProfileDto, AppError> {
        let repo = StaffRepository::new(self.db);

        let Some(profile) = repo.find_profile(guild_id, discord_id).await? else {
            return Err(AppError::NotFound(MSG_PROFILE_NOT_FOUND.to_string()));
        };

        let notes = repo.get_notes(guild_id, discord_id).await?;
        let warnings = repo.get_warnings(guild_id, discord_id).await?;

        Ok(StaffProfileDto::from_entity(profile, notes, warnings))
    }

    /// Adds worked minutes, creating the profile on first use.
    pub async fn add_minutes(
        &self,
        guild_id: &str,
        discord_id: &str,
        minutes: i64,
    ) -> Result<entity::staff_profile::Model, AppError> {
        if minutes <= 0 {
            return Err(AppError::BadRequest(MSG_INVALID_MINUTES.to_string()));
        }

        let repo = StaffRepository::new(self.db);
        repo.ensure_profile(guild_id, discord_id).await?;
        repo.add_minutes(guild_id, discord_id, minutes).await?;

        self.read_profile(guild_id, discord_id).await
    }

    /// Bumps the handled-ticket counter, creating the profile on first use.
    pub async fn increment_tickets(
        &self,
        guild_id: &str,
        discord_id: &str,
    ) -> Result<entity::staff_profile::Model, AppError> {
        let repo = StaffRepository::new(self.db);
        repo.ensure_profile(guild_id, discord_id).await?;
        repo.increment_tickets(guild_id, discord_id).await?;

        self.read_profile(guild_id, discord_id).await
    }

    pub async fn add_note(
        &self,
        param: AddStaffEntryParam,
    ) -> Result<entity::staff_note::Model, AppError> {
        if param.contenido.trim().is_empty() {
            return Err(AppError::BadRequest(MSG_EMPTY_CONTENT.to_string()));
        }

        let repo = StaffRepository::new(self.db);
        repo.ensure_profile(&param.guild_id, &param.discord_id).await?;

        Ok(repo.add_note(param).await?)
    }

    pub async fn add_warning(
        &self,
        param: AddStaffEntryParam,
    ) -> Result<entity::staff_warning::Model, AppError> {
        if param.contenido.trim().is_empty() {
            return Err(AppError::BadRequest(MSG_EMPTY_CONTENT.to_string()));
        }

        let repo = StaffRepository::new(self.db);
        repo.ensure_profile(&param.guild_id, &param.discord_id).await?;

        Ok(repo.add_warning(param).await?)
    }

    async fn read_profile(
        &self,
        guild_id: &str,
        discord_id: &str,
    ) -> Result<entity::staff_profile::Model, AppError> {
        StaffRepository::new(self.db)
            .find_profile(guild_id, discord_id)
            .await?
            .ok_or_else(|| AppError::NotFound(MSG_PROFILE_NOT_FOUND.to_string()))
    }
}
