use crate::{data::staff::StaffRepository, model::staff::AddStaffEntryParam};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod add_minutes;
mod add_note;
mod increment_tickets;
