//! MXRP community dashboard backend.
//!
//! API server for a Roblox roleplay Discord community: economy accounts,
//! staff profiles, arrest records (antecedentes), company/faction requests,
//! identity documents (INE/passport), news publishing, and server alerts.
//! Authentication is Discord OAuth2 plus opaque bearer session tokens;
//! authorization is driven by Discord guild-role membership checked against
//! a per-guild role configuration.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations via SeaORM repositories
//! - **Model Layer** (`model/`) - Domain models, operation parameters, and DTOs
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer-token extraction and authorization guards
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes to a controller
//! 2. **Middleware** extracts the bearer token (where the route is authenticated)
//! 3. **Controller** resolves the session, checks the required access tier, calls the service
//! 4. **Service** executes business logic and orchestrates repositories and external calls
//! 5. **Data** runs the database operations
//! 6. **Controller** shapes the response DTO

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
