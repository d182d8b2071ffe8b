use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(NewsPost::Table)
                    .if_not_exists()
                    .col(pk_auto(NewsPost::Id))
                    .col(string(NewsPost::GuildId))
                    .col(string(NewsPost::AutorId))
                    .col(string(NewsPost::Titulo))
                    .col(string(NewsPost::Contenido))
                    .col(string_null(NewsPost::Imagen))
                    .col(date_time(NewsPost::PublishedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(NewsPost::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum NewsPost {
    Table,
    Id,
    GuildId,
    AutorId,
    Titulo,
    Contenido,
    Imagen,
    PublishedAt,
}
