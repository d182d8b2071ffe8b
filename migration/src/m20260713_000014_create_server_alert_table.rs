use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServerAlert::Table)
                    .if_not_exists()
                    .col(pk_auto(ServerAlert::Id))
                    .col(string(ServerAlert::GuildId))
                    .col(string(ServerAlert::Mensaje))
                    .col(string(ServerAlert::Nivel))
                    .col(boolean(ServerAlert::Activo))
                    .col(date_time(ServerAlert::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ServerAlert::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ServerAlert {
    Table,
    Id,
    GuildId,
    Mensaje,
    Nivel,
    Activo,
    CreatedAt,
}
