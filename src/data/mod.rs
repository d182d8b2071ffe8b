//! Database repository layer for all domain entities.
//!
//! Repository structs own the SeaORM queries for one table family each.
//! Mutations of shared rows never read-then-save: they use filtered
//! `update_many`/`delete_many` statements (or a version compare-and-swap)
//! and report the affected row count to the service layer.

pub mod alert;
pub mod arrest;
pub mod company;
pub mod economy;
pub mod ine;
pub mod news;
pub mod oauth_state;
pub mod role_config;
pub mod session;
pub mod staff;
pub mod user;

#[cfg(test)]
mod test;
