use crate::{
    data::company::CompanyRequestRepository,
    model::company::{CreateCompanyRequestParam, ESTADO_APROBADA},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::company::create_pending_request};

mod approve;
mod delete_pending;
mod has_pending;

fn request_param(guild_id: &str, discord_id: &str) -> CreateCompanyRequestParam {
    CreateCompanyRequestParam {
        guild_id: guild_id.to_string(),
        discord_id: discord_id.to_string(),
        nombre: "Taller Central".to_string(),
        descripcion: "Reparaciones y tuning".to_string(),
        tipo: "empresa".to_string(),
        link_discord: "https://discord.gg/taller".to_string(),
    }
}
