use crate::{data::ine::IdentityRepository, model::ine::UpsertDocumentParam};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod set_document_url;
mod upsert;

fn document_param(guild_id: &str, discord_id: &str, nombre: &str) -> UpsertDocumentParam {
    UpsertDocumentParam {
        guild_id: guild_id.to_string(),
        discord_id: discord_id.to_string(),
        tipo: "ine".to_string(),
        nombre: nombre.to_string(),
        apellidos: "García López".to_string(),
        fecha_nacimiento: "1995-03-12".to_string(),
        nacionalidad: "Mexicana".to_string(),
        sexo: "M".to_string(),
    }
}
