use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ArrestEntry::Table)
                    .if_not_exists()
                    .col(pk_auto(ArrestEntry::Id))
                    .col(string(ArrestEntry::GuildId))
                    .col(string(ArrestEntry::DiscordId))
                    .col(string(ArrestEntry::Motivo))
                    .col(string(ArrestEntry::OficialId))
                    .col(integer(ArrestEntry::DuracionMinutos))
                    .col(boolean(ArrestEntry::Activo))
                    .col(date_time(ArrestEntry::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ArrestEntry::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ArrestEntry {
    Table,
    Id,
    GuildId,
    DiscordId,
    Motivo,
    OficialId,
    DuracionMinutos,
    Activo,
    CreatedAt,
}
