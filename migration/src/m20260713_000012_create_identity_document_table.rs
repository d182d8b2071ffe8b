use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(IdentityDocument::Table)
                    .if_not_exists()
                    .col(string(IdentityDocument::GuildId))
                    .col(string(IdentityDocument::DiscordId))
                    .col(string(IdentityDocument::Tipo))
                    .col(string(IdentityDocument::Nombre))
                    .col(string(IdentityDocument::Apellidos))
                    .col(string(IdentityDocument::FechaNacimiento))
                    .col(string(IdentityDocument::Nacionalidad))
                    .col(string(IdentityDocument::Sexo))
                    .col(boolean(IdentityDocument::Aprobado))
                    .col(string_null(IdentityDocument::DocumentoUrl))
                    .col(date_time(IdentityDocument::CreatedAt))
                    .col(date_time(IdentityDocument::UpdatedAt))
                    .primary_key(
                        Index::create()
                            .col(IdentityDocument::GuildId)
                            .col(IdentityDocument::DiscordId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(IdentityDocument::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum IdentityDocument {
    Table,
    GuildId,
    DiscordId,
    Tipo,
    Nombre,
    Apellidos,
    FechaNacimiento,
    Nacionalidad,
    Sexo,
    Aprobado,
    DocumentoUrl,
    CreatedAt,
    UpdatedAt,
}
