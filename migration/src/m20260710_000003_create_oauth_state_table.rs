use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OauthState::Table)
                    .if_not_exists()
                    .col(pk_auto(OauthState::Id))
                    .col(string_uniq(OauthState::State))
                    .col(date_time(OauthState::CreatedAt))
                    .col(date_time(OauthState::ExpiresAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OauthState::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OauthState {
    Table,
    Id,
    State,
    CreatedAt,
    ExpiresAt,
}
