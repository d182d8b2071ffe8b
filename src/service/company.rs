//! Company/faction-request lifecycle.
//!
//! Review outcomes are committed first; the applicant's DM goes out
//! afterwards and a delivery failure is surfaced in the response rather
//! than rolling the review back.

use sea_orm::DatabaseConnection;

use crate::{
    data::company::CompanyRequestRepository,
    error::AppError,
    model::company::{
        CreateCompanyRequestParam, ReviewOutcomeDto, ReviewRequestParam, ESTADO_APROBADA,
        ESTADO_PENDIENTE, TIPO_EMPRESA, TIPO_FACCION,
    },
    service::discord::Notifier,
    util::parse::parse_snowflake,
};

const MSG_MISSING_FIELDS: &str = "Todos los campos son requeridos";
const MSG_INVALID_TIPO: &str = "El tipo debe ser 'empresa' o 'faccion'";
const MSG_ALREADY_PENDING: &str = "Ya tienes una solicitud pendiente";
const MSG_REQUEST_NOT_FOUND: &str = "No se encontró la solicitud";
const MSG_ALREADY_REVIEWED: &str = "La solicitud ya fue revisada";

pub struct CompanyService<'a, N: Notifier> {
    db: &'a DatabaseConnection,
    notifier: N,
}

impl<'a, N: Notifier> CompanyService<'a, N> {
    pub fn new(db: &'a DatabaseConnection, notifier: N) -> Self {
        Self { db, notifier }
    }

    /// Submits a new request. Every field is required and a user can hold
    /// at most one pending request per guild.
    pub async fn create(
        &self,
        param: CreateCompanyRequestParam,
    ) -> Result<entity::company_request::Model, AppError> {
        if param.nombre.trim().is_empty()
            || param.descripcion.trim().is_empty()
            || param.tipo.trim().is_empty()
            || param.link_discord.trim().is_empty()
        {
            return Err(AppError::BadRequest(MSG_MISSING_FIELDS.to_string()));
        }

        if param.tipo != TIPO_EMPRESA && param.tipo != TIPO_FACCION {
            return Err(AppError::BadRequest(MSG_INVALID_TIPO.to_string()));
        }

        let repo = CompanyRequestRepository::new(self.db);

        if repo.has_pending(&param.guild_id, &param.discord_id).await? {
            return Err(AppError::Conflict(MSG_ALREADY_PENDING.to_string()));
        }

        Ok(repo.create(param).await?)
    }

    /// Looks a request up by id, for handlers that need its guild before
    /// running the reviewer check.
    pub async fn find(&self, id: i32) -> Result<entity::company_request::Model, AppError> {
        CompanyRequestRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(MSG_REQUEST_NOT_FOUND.to_string()))
    }

    pub async fn list_pending(
        &self,
        guild_id: &str,
    ) -> Result<Vec<entity::company_request::Model>, AppError> {
        Ok(CompanyRequestRepository::new(self.db)
            .list_pending(guild_id)
            .await?)
    }

    pub async fn list_by_user(
        &self,
        guild_id: &str,
        discord_id: &str,
    ) -> Result<Vec<entity::company_request::Model>, AppError> {
        Ok(CompanyRequestRepository::new(self.db)
            .list_by_user(guild_id, discord_id)
            .await?)
    }

    /// Approves a pending request and DMs the applicant. Two reviewers
    /// racing on the same request: exactly one wins, the other gets a
    /// conflict.
    pub async fn approve(&self, param: ReviewRequestParam) -> Result<ReviewOutcomeDto, AppError> {
        let repo = CompanyRequestRepository::new(self.db);

        let Some(request) = repo.find_by_id(param.request_id).await? else {
            return Err(AppError::NotFound(MSG_REQUEST_NOT_FOUND.to_string()));
        };

        let approved = repo
            .approve(
                param.request_id,
                ESTADO_APROBADA,
                &param.revisor_id,
                &param.revisor_rol,
                &param.justificacion,
            )
            .await?;

        if !approved {
            return Err(AppError::Conflict(MSG_ALREADY_REVIEWED.to_string()));
        }

        let message = format!(
            "Tu solicitud de {} \"{}\" ha sido aprobada por {}. Justificación: {}",
            request.tipo, request.nombre, param.revisor_rol, param.justificacion
        );
        let notificado = self.notify(&request.discord_id, &message).await;

        Ok(ReviewOutcomeDto {
            estado: ESTADO_APROBADA.to_string(),
            notificado,
        })
    }

    /// Denies a pending request by deleting it, then DMs the applicant
    /// with the justification.
    pub async fn deny(&self, param: ReviewRequestParam) -> Result<ReviewOutcomeDto, AppError> {
        let repo = CompanyRequestRepository::new(self.db);

        let Some(request) = repo.find_by_id(param.request_id).await? else {
            return Err(AppError::NotFound(MSG_REQUEST_NOT_FOUND.to_string()));
        };

        if request.estado != ESTADO_PENDIENTE {
            return Err(AppError::Conflict(MSG_ALREADY_REVIEWED.to_string()));
        }

        let deleted = repo.delete_pending(param.request_id).await?;
        if !deleted {
            return Err(AppError::Conflict(MSG_ALREADY_REVIEWED.to_string()));
        }

        let message = format!(
            "Tu solicitud de {} \"{}\" ha sido denegada por {}. Justificación: {}",
            request.tipo, request.nombre, param.revisor_rol, param.justificacion
        );
        let notificado = self.notify(&request.discord_id, &message).await;

        Ok(ReviewOutcomeDto {
            estado: "denegada".to_string(),
            notificado,
        })
    }

    /// DM delivery after the review committed. Failures are logged and
    /// reported through the `notificado` flag, never propagated.
    async fn notify(&self, discord_id: &str, message: &str) -> bool {
        let user_id = match parse_snowflake(discord_id) {
            Ok(id) => id,
            Err(_) => {
                tracing::warn!("Cannot DM applicant: bad discord id '{}'", discord_id);
                return false;
            }
        };

        match self.notifier.send_dm(user_id, message).await {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!("Failed to DM applicant {}: {}", discord_id, err);
                false
            }
        }
    }
}
