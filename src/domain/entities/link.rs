//! URL record entity representing a shortened URL mapping.

use chrono::{DateTime, Duration, Utc};

/// A shortened URL with its lifetime metadata.
///
/// All fields are immutable after creation; activity is derived from
/// `expires_at` at read time and never stored.
#[derive(Debug, Clone)]
pub struct UrlRecord {
    pub code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl UrlRecord {
    /// Creates a record stamped `now`, expiring `validity_minutes` later.
    pub fn new(code: String, original_url: String, validity_minutes: i64) -> Self {
        let created_at = Utc::now();
        Self {
            code,
            original_url,
            created_at,
            expires_at: created_at + Duration::minutes(validity_minutes),
        }
    }

    /// Returns true if the record has not yet passed its expiry time.
    pub fn is_active(&self) -> bool {
        self.is_active_at(Utc::now())
    }

    /// Activity check against an explicit clock, for deterministic callers.
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        now <= self.expires_at
    }
}

/// Input data for registering a new short URL.
///
/// The registry stamps `created_at` and derives `expires_at` at insertion
/// time so the two are always exactly `validity_minutes` apart.
#[derive(Debug, Clone)]
pub struct NewUrlRecord {
    pub code: String,
    pub original_url: String,
    pub validity_minutes: i64,
}
