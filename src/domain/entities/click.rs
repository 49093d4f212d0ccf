//! Click entity representing a single redirect event.

use chrono::{DateTime, Local, Utc};
use serde::Serialize;

/// Placeholder for metadata the client did not supply or that could not be
/// resolved.
pub const UNKNOWN: &str = "Unknown";

/// Approximate geolocation attached to a click.
///
/// Every field falls back to `"Unknown"` on a failed lookup. Clicks from
/// loopback or private-range addresses resolve to the `Local` marker with
/// the host's own UTC offset as the timezone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeoLocation {
    pub country: String,
    pub region: String,
    pub city: String,
    pub timezone: String,
}

impl GeoLocation {
    /// All-unknown location, used when a lookup misses.
    pub fn unknown() -> Self {
        Self {
            country: UNKNOWN.to_string(),
            region: UNKNOWN.to_string(),
            city: UNKNOWN.to_string(),
            timezone: UNKNOWN.to_string(),
        }
    }

    /// Marker location for loopback and private-range client addresses.
    pub fn local() -> Self {
        Self {
            country: "Local".to_string(),
            region: "Local".to_string(),
            city: "Local".to_string(),
            timezone: Local::now().offset().to_string(),
        }
    }
}

/// A click recorded when a shortened link is accessed.
///
/// Metadata strings are pre-normalized by the click worker: a missing
/// user agent becomes `"Unknown"`, the referrer is reduced to the
/// referring page's hostname (or `"direct"` / `"unknown"`).
#[derive(Debug, Clone)]
pub struct ClickRecord {
    pub clicked_at: DateTime<Utc>,
    pub ip: String,
    pub user_agent: String,
    pub referrer: String,
    pub location: GeoLocation,
}

/// Input data for recording a click; the registry assigns the timestamp.
#[derive(Debug, Clone)]
pub struct NewClick {
    pub ip: String,
    pub user_agent: String,
    pub referrer: String,
    pub location: GeoLocation,
}

impl NewClick {
    /// Stamps the click with the server clock, producing the stored record.
    pub fn into_record(self) -> ClickRecord {
        ClickRecord {
            clicked_at: Utc::now(),
            ip: self.ip,
            user_agent: self.user_agent,
            referrer: self.referrer,
            location: self.location,
        }
    }
}
