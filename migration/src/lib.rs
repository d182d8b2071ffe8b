pub use sea_orm_migration::prelude::*;

mod m20260710_000001_create_user_table;
mod m20260710_000002_create_session_table;
mod m20260710_000003_create_oauth_state_table;
mod m20260710_000004_create_role_config_table;
mod m20260711_000005_create_economy_account_table;
mod m20260711_000006_create_staff_profile_table;
mod m20260711_000007_create_staff_note_table;
mod m20260711_000008_create_staff_warning_table;
mod m20260712_000009_create_arrest_record_table;
mod m20260712_000010_create_arrest_entry_table;
mod m20260712_000011_create_company_request_table;
mod m20260713_000012_create_identity_document_table;
mod m20260713_000013_create_news_post_table;
mod m20260713_000014_create_server_alert_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260710_000001_create_user_table::Migration),
            Box::new(m20260710_000002_create_session_table::Migration),
            Box::new(m20260710_000003_create_oauth_state_table::Migration),
            Box::new(m20260710_000004_create_role_config_table::Migration),
            Box::new(m20260711_000005_create_economy_account_table::Migration),
            Box::new(m20260711_000006_create_staff_profile_table::Migration),
            Box::new(m20260711_000007_create_staff_note_table::Migration),
            Box::new(m20260711_000008_create_staff_warning_table::Migration),
            Box::new(m20260712_000009_create_arrest_record_table::Migration),
            Box::new(m20260712_000010_create_arrest_entry_table::Migration),
            Box::new(m20260712_000011_create_company_request_table::Migration),
            Box::new(m20260713_000012_create_identity_document_table::Migration),
            Box::new(m20260713_000013_create_news_post_table::Migration),
            Box::new(m20260713_000014_create_server_alert_table::Migration),
        ]
    }
}
