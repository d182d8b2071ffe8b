use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ArrestRecord::Table)
                    .if_not_exists()
                    .col(string(ArrestRecord::GuildId))
                    .col(string(ArrestRecord::DiscordId))
                    .col(integer(ArrestRecord::TotalArrestos))
                    .col(boolean(ArrestRecord::UsuarioPeligroso))
                    .col(date_time(ArrestRecord::UpdatedAt))
                    .primary_key(
                        Index::create()
                            .col(ArrestRecord::GuildId)
                            .col(ArrestRecord::DiscordId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ArrestRecord::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ArrestRecord {
    Table,
    GuildId,
    DiscordId,
    TotalArrestos,
    UsuarioPeligroso,
    UpdatedAt,
}
