use crate::data::session::SessionRepository;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod delete_by_token;
mod find_by_token;
mod purge_expired;
