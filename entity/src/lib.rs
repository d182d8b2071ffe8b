//! SeaORM entity definitions for the MXRP dashboard.
//!
//! Per-guild-per-user records (economy accounts, staff profiles, arrest
//! records, identity documents) use a composite `(guild_id, discord_id)`
//! primary key. Append-only sub-collections (notes, warnings, arrest
//! entries) are separate tables keyed by the same pair.

pub mod prelude;

pub mod arrest_entry;
pub mod arrest_record;
pub mod company_request;
pub mod economy_account;
pub mod identity_document;
pub mod news_post;
pub mod oauth_state;
pub mod role_config;
pub mod server_alert;
pub mod session;
pub mod staff_note;
pub mod staff_profile;
pub mod staff_warning;
pub mod user;
