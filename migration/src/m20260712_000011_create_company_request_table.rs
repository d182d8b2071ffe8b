use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CompanyRequest::Table)
                    .if_not_exists()
                    .col(pk_auto(CompanyRequest::Id))
                    .col(string(CompanyRequest::GuildId))
                    .col(string(CompanyRequest::DiscordId))
                    .col(string(CompanyRequest::Nombre))
                    .col(string(CompanyRequest::Descripcion))
                    .col(string(CompanyRequest::Tipo))
                    .col(string(CompanyRequest::LinkDiscord))
                    .col(string(CompanyRequest::Estado))
                    .col(string_null(CompanyRequest::RevisorId))
                    .col(string_null(CompanyRequest::RevisorRol))
                    .col(string_null(CompanyRequest::Justificacion))
                    .col(date_time(CompanyRequest::CreatedAt))
                    .col(date_time_null(CompanyRequest::ReviewedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CompanyRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CompanyRequest {
    Table,
    Id,
    GuildId,
    DiscordId,
    Nombre,
    Descripcion,
    Tipo,
    LinkDiscord,
    Estado,
    RevisorId,
    RevisorRol,
    Justificacion,
    CreatedAt,
    ReviewedAt,
}
