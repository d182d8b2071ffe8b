//! Company/faction-request factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating company/faction requests.
///
/// Defaults to a pending "empresa" request with generated names.
pub struct CompanyRequestFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    discord_id: String,
    nombre: String,
    descripcion: String,
    tipo: String,
    link_discord: String,
    estado: String,
}

impl<'a> CompanyRequestFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            guild_id: "100".to_string(),
            discord_id: id.to_string(),
            nombre: format!("Empresa {}", id),
            descripcion: "Una empresa de pruebas".to_string(),
            tipo: "empresa".to_string(),
            link_discord: "https://discord.gg/ejemplo".to_string(),
            estado: "pendiente".to_string(),
        }
    }

    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    pub fn discord_id(mut self, discord_id: impl Into<String>) -> Self {
        self.discord_id = discord_id.into();
        self
    }

    pub fn tipo(mut self, tipo: impl Into<String>) -> Self {
        self.tipo = tipo.into();
        self
    }

    pub fn estado(mut self, estado: impl Into<String>) -> Self {
        self.estado = estado.into();
        self
    }

    pub async fn build(self) -> Result<entity::company_request::Model, DbErr> {
        entity::company_request::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            discord_id: ActiveValue::Set(self.discord_id),
            nombre: ActiveValue::Set(self.nombre),
            descripcion: ActiveValue::Set(self.descripcion),
            tipo: ActiveValue::Set(self.tipo),
            link_discord: ActiveValue::Set(self.link_discord),
            estado: ActiveValue::Set(self.estado),
            revisor_id: ActiveValue::Set(None),
            revisor_rol: ActiveValue::Set(None),
            justificacion: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            reviewed_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending request for a specific user.
pub async fn create_pending_request(
    db: &DatabaseConnection,
    guild_id: &str,
    discord_id: &str,
) -> Result<entity::company_request::Model, DbErr> {
    CompanyRequestFactory::new(db)
        .guild_id(guild_id)
        .discord_id(discord_id)
        .build()
        .await
}
