//! Guild alert banners.

use sea_orm::DatabaseConnection;

use crate::{data::alert::AlertRepository, error::AppError, model::alert::CreateAlertParam};

const MSG_EMPTY_MESSAGE: &str = "El mensaje de la alerta es requerido";
const MSG_ALERT_NOT_FOUND: &str = "No se encontró una alerta activa con ese identificador";

const NIVELES: [&str; 3] = ["info", "aviso", "critico"];

pub struct AlertService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AlertService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        param: CreateAlertParam,
    ) -> Result<entity::server_alert::Model, AppError> {
        if param.mensaje.trim().is_empty() {
            return Err(AppError::BadRequest(MSG_EMPTY_MESSAGE.to_string()));
        }

        if !NIVELES.contains(&param.nivel.as_str()) {
            return Err(AppError::BadRequest(format!(
                "Nivel desconocido '{}', debe ser uno de: {}",
                param.nivel,
                NIVELES.join(", ")
            )));
        }

        Ok(AlertRepository::new(self.db).create(param).await?)
    }

    /// Active alerts for a guild. Public, no authentication.
    pub async fn list_active(
        &self,
        guild_id: &str,
    ) -> Result<Vec<entity::server_alert::Model>, AppError> {
        Ok(AlertRepository::new(self.db).list_active(guild_id).await?)
    }

    pub async fn resolve(&self, guild_id: &str, id: i32) -> Result<(), AppError> {
        if AlertRepository::new(self.db).resolve(guild_id, id).await? {
            Ok(())
        } else {
            Err(AppError::NotFound(MSG_ALERT_NOT_FOUND.to_string()))
        }
    }
}
