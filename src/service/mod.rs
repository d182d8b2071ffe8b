//! Service layer for business logic and orchestration.
//!
//! Services sit between controllers and repositories: they validate
//! domain rules, coordinate repository calls, and drive external effects
//! (Discord member lookups, DMs, webhook delivery). Post-commit side
//! effects are sequential and never roll the primary mutation back.

pub mod alert;
pub mod arrest;
pub mod auth;
pub mod company;
pub mod discord;
pub mod economy;
pub mod ine;
pub mod news;
pub mod permission;
pub mod staff;
