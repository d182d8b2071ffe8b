//! Domain models, operation parameters, and response DTOs.
//!
//! Parameter structs carry validated input from controllers into services;
//! DTOs shape entity models into the JSON the dashboard consumes. Field
//! names on the wire stay in the community's Spanish, matching the clients.

pub mod alert;
pub mod api;
pub mod arrest;
pub mod auth;
pub mod company;
pub mod economy;
pub mod ine;
pub mod news;
pub mod permission;
pub mod staff;
pub mod user;
