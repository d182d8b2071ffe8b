use crate::data::oauth_state::OauthStateRepository;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod consume;
mod create;
