//! News publishing: store the post, then push it to the Discord webhook.
//!
//! The stored row is the source of truth. Webhook delivery happens after
//! the insert and a failure is reported through `publicado`, never by
//! failing the request.

use sea_orm::DatabaseConnection;
use serde_json::json;

use crate::{
    data::news::NewsRepository,
    error::AppError,
    model::news::{NewsPostDto, PublishNewsParam, PublishOutcomeDto},
};

const MSG_MISSING_FIELDS: &str = "El título y el contenido son requeridos";

const RECENT_POSTS_LIMIT: u64 = 20;

/// Embed accent color for published news (MXRP brand orange).
const EMBED_COLOR: u32 = 0xE67E22;

pub struct NewsService<'a> {
    db: &'a DatabaseConnection,
    http_client: &'a reqwest::Client,
    webhook_url: &'a str,
}

impl<'a> NewsService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        webhook_url: &'a str,
    ) -> Self {
        Self {
            db,
            http_client,
            webhook_url,
        }
    }

    /// Stores the post, then delivers it to the configured webhook.
    pub async fn publish(&self, param: PublishNewsParam) -> Result<PublishOutcomeDto, AppError> {
        if param.titulo.trim().is_empty() || param.contenido.trim().is_empty() {
            return Err(AppError::BadRequest(MSG_MISSING_FIELDS.to_string()));
        }

        let post = NewsRepository::new(self.db).create(param).await?;
        let publicado = self.deliver(&post).await;

        Ok(PublishOutcomeDto {
            noticia: NewsPostDto::from_entity(post),
            publicado,
        })
    }

    pub async fn list_recent(
        &self,
        guild_id: &str,
    ) -> Result<Vec<entity::news_post::Model>, AppError> {
        Ok(NewsRepository::new(self.db)
            .list_recent(guild_id, RECENT_POSTS_LIMIT)
            .await?)
    }

    /// Posts the embed to the webhook. Failures are logged and reflected
    /// in the `publicado` flag.
    async fn deliver(&self, post: &entity::news_post::Model) -> bool {
        let mut embed = json!({
            "title": post.titulo,
            "description": post.contenido,
            "color": EMBED_COLOR,
            "footer": { "text": format!("Publicado por <@{}>", post.autor_id) },
            "timestamp": post.published_at.and_utc().to_rfc3339(),
        });

        if let Some(imagen) = &post.imagen {
            embed["image"] = json!({ "url": imagen });
        }

        let payload = json!({ "embeds": [embed] });

        match self
            .http_client
            .post(self.webhook_url)
            .json(&payload)
            .send()
            .await
        {
            Ok(response) if response.status().is_success() => true,
            Ok(response) => {
                tracing::warn!(
                    "News webhook rejected post {}: HTTP {}",
                    post.id,
                    response.status()
                );
                false
            }
            Err(err) => {
                tracing::warn!("News webhook delivery failed for post {}: {}", post.id, err);
                false
            }
        }
    }
}
