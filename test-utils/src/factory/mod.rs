//! Factories for creating test entities with sensible defaults.

pub mod company;
pub mod economy;
pub mod helpers;
pub mod role_config;
pub mod user;
