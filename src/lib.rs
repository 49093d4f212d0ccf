//! # linksnip
//!
//! A fast in-memory URL shortening service with click analytics, built
//! with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer
//! separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities, the registry trait,
//!   and background workers
//! - **Application Layer** ([`application`]) - Business logic and service
//!   orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory storage,
//!   geolocation, and remote log forwarding
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Time-bound short links with lazy expiry and a periodic cleanup sweep
//! - Per-link click analytics (timestamp, referrer, approximate
//!   geolocation, user agent) recorded off the request path
//! - Fire-and-forget structured log forwarding to a remote collector
//!
//! ## Quick Start
//!
//! ```bash
//! # Everything has defaults; run as-is or override via environment
//! export LISTEN="0.0.0.0:3000"
//! export BASE_URL="https://snip.example.com"
//!
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
    pub use crate::application::services::{LinkService, StatsService};
    pub use crate::domain::entities::{ClickRecord, GeoLocation, NewClick, NewUrlRecord, UrlRecord};
    pub use crate::domain::repositories::{UrlAnalytics, UrlRegistry};
    pub use crate::error::AppError;
    pub use crate::infrastructure::memory::InMemoryRegistry;
    pub use crate::state::AppState;
}
