//! # shorturl
//!
//! A small URL shortening service built with Axum and SQLite.
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles with clear layer
//! separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities and repository traits
//! - **Application Layer** ([`application`]) - Identifier allocation,
//!   authorization, lifecycle and redirect services
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite persistence
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Operations
//!
//! - `POST /create` - Mint a short identifier (or claim a requested one) for
//!   a target URL; returns the identifier and its one-time-visible auth token
//! - `GET /{id}` - 301 redirect to the target, counting the visit per client
//! - `GET /{id}/stats` - Per-client visit counts (token required)
//! - `DELETE /{id}` - Remove a mapping (token required)
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional; defaults to sqlite://shorturl.db
//! export DATABASE_URL="sqlite://shorturl.db"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        AuthService, IdAllocator, MappingService, RedirectService,
    };
    pub use crate::config::{Config, IdPolicy};
    pub use crate::domain::entities::{NewMapping, UrlMapping, VisitRecord};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
