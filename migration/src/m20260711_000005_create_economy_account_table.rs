use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EconomyAccount::Table)
                    .if_not_exists()
                    .col(string(EconomyAccount::GuildId))
                    .col(string(EconomyAccount::DiscordId))
                    .col(big_integer(EconomyAccount::Salario))
                    .col(big_integer(EconomyAccount::Debito))
                    .col(big_integer(EconomyAccount::Gobierno))
                    .col(big_integer(EconomyAccount::Empresa))
                    .col(big_integer(EconomyAccount::Efectivo))
                    .col(big_integer(EconomyAccount::DineroNegro))
                    .col(big_integer(EconomyAccount::Deuda))
                    .col(big_integer(EconomyAccount::Dolares))
                    .col(big_integer(EconomyAccount::Euros))
                    .col(integer(EconomyAccount::Version))
                    .col(date_time(EconomyAccount::CreatedAt))
                    .primary_key(
                        Index::create()
                            .col(EconomyAccount::GuildId)
                            .col(EconomyAccount::DiscordId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EconomyAccount::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EconomyAccount {
    Table,
    GuildId,
    DiscordId,
    Salario,
    Debito,
    Gobierno,
    Empresa,
    Efectivo,
    DineroNegro,
    Deuda,
    Dolares,
    Euros,
    Version,
    CreatedAt,
}
