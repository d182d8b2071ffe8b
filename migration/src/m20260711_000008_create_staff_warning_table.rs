use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StaffWarning::Table)
                    .if_not_exists()
                    .col(pk_auto(StaffWarning::Id))
                    .col(string(StaffWarning::GuildId))
                    .col(string(StaffWarning::DiscordId))
                    .col(string(StaffWarning::Contenido))
                    .col(string(StaffWarning::StaffId))
                    .col(date_time(StaffWarning::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StaffWarning::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StaffWarning {
    Table,
    Id,
    GuildId,
    DiscordId,
    Contenido,
    StaffId,
    CreatedAt,
}
