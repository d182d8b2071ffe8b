//! News-post repository.

use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::model::news::PublishNewsParam;

pub struct NewsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NewsRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        param: PublishNewsParam,
    ) -> Result<entity::news_post::Model, DbErr> {
        entity::prelude::NewsPost::insert(entity::news_post::ActiveModel {
            guild_id: ActiveValue::Set(param.guild_id),
            autor_id: ActiveValue::Set(param.autor_id),
            titulo: ActiveValue::Set(param.titulo),
            contenido: ActiveValue::Set(param.contenido),
            imagen: ActiveValue::Set(param.imagen),
            published_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    /// Recent posts for a guild, newest first.
    pub async fn list_recent(
        &self,
        guild_id: &str,
        limit: u64,
    ) -> Result<Vec<entity::news_post::Model>, DbErr> {
        entity::prelude::NewsPost::find()
            .filter(entity::news_post::Column::GuildId.eq(guild_id))
            .order_by_desc(entity::news_post::Column::PublishedAt)
            .limit(limit)
            .all(self.db)
            .await
    }
}
