//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; concrete
//! implementations live in `crate::infrastructure`. Mock implementations
//! are auto-generated via `mockall` for testing.

pub mod url_registry;

pub use url_registry::{UrlAnalytics, UrlRegistry};

#[cfg(test)]
pub use url_registry::MockUrlRegistry;
