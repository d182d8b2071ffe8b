use crate::{data::arrest::ArrestRepository, model::arrest::NewArrestParam};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod deactivate_entry;
mod increment_total;
