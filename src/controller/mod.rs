//! HTTP request handlers.
//!
//! Handlers follow one shape: extract the bearer token, resolve the user
//! through `AuthGuard`, run the tier check through the permission service
//! where the route requires one, call the domain service, and serialize
//! the result. Request-body structs live next to the handlers that
//! consume them.

pub mod alert;
pub mod arrest;
pub mod auth;
pub mod company;
pub mod config;
pub mod economy;
pub mod ine;
pub mod news;
pub mod staff;
