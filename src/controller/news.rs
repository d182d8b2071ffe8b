use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    error::AppError,
    middleware::auth::{AuthGuard, BearerToken},
    model::{
        news::{NewsPostDto, PublishNewsParam},
        permission::AccessTier,
    },
    service::news::NewsService,
    state::AppState,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishBody {
    pub guild_id: String,
    pub titulo: String,
    pub contenido: String,
    pub imagen: Option<String>,
}

/// POST /api/noticias - Publish a news post
///
/// News tier. The post is stored first, then pushed to the configured
/// Discord webhook; `publicado: false` means the row exists but the
/// webhook delivery failed.
pub async fn publish(
    State(state): State<AppState>,
    token: BearerToken,
    Json(body): Json<PublishBody>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db).require_user(&token).await?;
    state
        .permissions()
        .require(&body.guild_id, &user.discord_id, AccessTier::News)
        .await?;

    let outcome = NewsService::new(&state.db, &state.http_client, &state.news_webhook_url)
        .publish(PublishNewsParam {
            guild_id: body.guild_id,
            autor_id: user.discord_id,
            titulo: body.titulo,
            contenido: body.contenido,
            imagen: body.imagen,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(outcome)))
}

/// GET /api/noticias/{guild} - Recent posts, newest first
pub async fn list_recent(
    State(state): State<AppState>,
    Path(guild_id): Path<String>,
    token: BearerToken,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db).require_user(&token).await?;

    let posts = NewsService::new(&state.db, &state.http_client, &state.news_webhook_url)
        .list_recent(&guild_id)
        .await?;
    let dtos: Vec<_> = posts.into_iter().map(NewsPostDto::from_entity).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
