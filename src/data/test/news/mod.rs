use crate::{data::news::NewsRepository, model::news::PublishNewsParam};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod list_recent;
