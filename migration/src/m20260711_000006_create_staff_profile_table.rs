use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StaffProfile::Table)
                    .if_not_exists()
                    .col(string(StaffProfile::GuildId))
                    .col(string(StaffProfile::DiscordId))
                    .col(big_integer(StaffProfile::MinutosTrabajados))
                    .col(string(StaffProfile::Rango))
                    .col(integer(StaffProfile::Valoracion))
                    .col(integer(StaffProfile::Tickets))
                    .col(date_time(StaffProfile::CreatedAt))
                    .primary_key(
                        Index::create()
                            .col(StaffProfile::GuildId)
                            .col(StaffProfile::DiscordId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StaffProfile::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StaffProfile {
    Table,
    GuildId,
    DiscordId,
    MinutosTrabajados,
    Rango,
    Valoracion,
    Tickets,
    CreatedAt,
}
