use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RoleConfig::Table)
                    .if_not_exists()
                    .col(string(RoleConfig::GuildId))
                    .col(string(RoleConfig::RoleName))
                    .col(string(RoleConfig::DiscordRoleId))
                    .primary_key(
                        Index::create()
                            .col(RoleConfig::GuildId)
                            .col(RoleConfig::RoleName),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RoleConfig::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RoleConfig {
    Table,
    GuildId,
    RoleName,
    DiscordRoleId,
}
