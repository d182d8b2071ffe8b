use crate::data::role_config::RoleConfigRepository;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod upsert;
