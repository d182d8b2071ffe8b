use crate::{data::economy::EconomyRepository, model::economy::SubBalance};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::economy::create_funded_account};

mod swap_purchase_balances;
mod swap_sub_balance;
