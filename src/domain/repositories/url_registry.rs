//! Registry trait for shortcode storage and click analytics.

use crate::domain::entities::{ClickRecord, NewClick, NewUrlRecord, UrlRecord};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Full analytics view for a single shortcode.
///
/// `is_active` is recomputed at query time, never cached.
#[derive(Debug, Clone)]
pub struct UrlAnalytics {
    pub record: UrlRecord,
    pub total_clicks: u64,
    pub clicks: Vec<ClickRecord>,
    pub is_active: bool,
}

/// Registry interface for shortcode records and their click histories.
///
/// The registry owns the only mutable shared state in the service. Expiry
/// is evaluated lazily on every read; the periodic cleanup sweep merely
/// reclaims storage and frees codes for reuse.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::InMemoryRegistry`] - DashMap-backed store
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/registry.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRegistry: Send + Sync {
    /// Returns true if a record for `code` is present, regardless of its
    /// expiry state.
    ///
    /// Expired-but-unpurged codes count as present: a code becomes
    /// reusable only after the cleanup sweep physically removes it.
    async fn exists(&self, code: &str) -> Result<bool, AppError>;

    /// Atomically registers a new short URL if the code is free.
    ///
    /// Stamps `created_at` and derives `expires_at` at insertion time, and
    /// creates an empty analytics entry with the same lifetime.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code is already present
    /// (expired-but-unpurged included). The check-and-insert is a single
    /// atomic step, so two concurrent creates can never both claim a code.
    async fn create(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError>;

    /// Finds a record by code, treating expired records as absent.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlRecord))` if present and not expired
    /// - `Ok(None)` if absent or expired; callers cannot tell the two
    ///   apart, which keeps expired links from leaking their existence
    async fn find_active(&self, code: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Appends a click with a server-assigned timestamp and increments the
    /// click counter, atomically per code.
    ///
    /// Does NOT check expiry: a click racing a concurrent expiry between
    /// lookup and recording is still counted. Returns `Ok(false)` and
    /// performs no mutation when no analytics entry exists for `code`;
    /// since clicks are only recorded after a successful lookup, that case
    /// signals an internal consistency fault (or a lost race against the
    /// cleanup sweep) and is escalated by the caller, not here.
    async fn record_click(&self, code: &str, click: NewClick) -> Result<bool, AppError>;

    /// Retrieves the analytics view for a code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlAnalytics))` if the record and its analytics exist,
    ///   with `is_active` computed against the current clock
    /// - `Ok(None)` if absent
    async fn get_analytics(&self, code: &str) -> Result<Option<UrlAnalytics>, AppError>;

    /// Removes every record with `expires_at < now` and returns the count.
    ///
    /// Idempotent: a second sweep with the same clock removes nothing.
    /// Safe to run concurrently with reads and writes.
    async fn cleanup_expired(&self, now: DateTime<Utc>) -> Result<usize, AppError>;
}
