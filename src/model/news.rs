use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsPostDto {
    pub id: i32,
    pub autor_id: String,
    pub titulo: String,
    pub contenido: String,
    pub imagen: Option<String>,
    pub fecha: NaiveDateTime,
}

impl NewsPostDto {
    pub fn from_entity(entity: entity::news_post::Model) -> Self {
        Self {
            id: entity.id,
            autor_id: entity.autor_id,
            titulo: entity.titulo,
            contenido: entity.contenido,
            imagen: entity.imagen,
            fecha: entity.published_at,
        }
    }
}

/// Parameters for storing and publishing a news post.
pub struct PublishNewsParam {
    pub guild_id: String,
    pub autor_id: String,
    pub titulo: String,
    pub contenido: String,
    pub imagen: Option<String>,
}

/// Publish result: the stored post plus whether webhook delivery worked.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishOutcomeDto {
    pub noticia: NewsPostDto,
    pub publicado: bool,
}
