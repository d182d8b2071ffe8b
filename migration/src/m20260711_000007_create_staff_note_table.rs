use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StaffNote::Table)
                    .if_not_exists()
                    .col(pk_auto(StaffNote::Id))
                    .col(string(StaffNote::GuildId))
                    .col(string(StaffNote::DiscordId))
                    .col(string(StaffNote::Contenido))
                    .col(string(StaffNote::StaffId))
                    .col(date_time(StaffNote::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StaffNote::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StaffNote {
    Table,
    Id,
    GuildId,
    DiscordId,
    Contenido,
    StaffId,
    CreatedAt,
}
