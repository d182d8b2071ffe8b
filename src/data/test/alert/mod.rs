use crate::{data::alert::AlertRepository, model::alert::CreateAlertParam};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod resolve;
