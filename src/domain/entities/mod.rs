//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without infrastructure concerns.
//!
//! # Entity Types
//!
//! - [`UrlRecord`] - A shortened URL mapping with its lifetime
//! - [`ClickRecord`] - A click event on a shortened link
//! - [`AnalyticsEntry`] - Per-link click history and counter
//!
//! # Design Pattern
//!
//! Creation inputs use separate structs (`NewUrlRecord`, `NewClick`) so the
//! registry controls timestamp assignment.

pub mod analytics;
pub mod click;
pub mod link;

pub use analytics::AnalyticsEntry;
pub use click::{ClickRecord, GeoLocation, NewClick, UNKNOWN};
pub use link::{NewUrlRecord, UrlRecord};
