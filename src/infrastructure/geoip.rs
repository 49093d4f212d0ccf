//! Best-effort IP geolocation.
//!
//! Lookups never fail: an address that cannot be resolved yields an
//! all-`"Unknown"` location, and loopback/private-range addresses resolve
//! to the `Local` marker. The trait keeps the door open for a real
//! database-backed provider without touching the click pipeline.

use async_trait::async_trait;
use std::net::IpAddr;

use crate::domain::entities::GeoLocation;
use crate::utils::client_ip::is_private_or_local;

/// Geolocation lookup interface.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GeoIpLookup: Send + Sync {
    /// Resolves an IP address to an approximate location. Never errors.
    async fn lookup(&self, ip: &str) -> GeoLocation;
}

/// Built-in provider with no external database.
///
/// Classifies loopback and private-range addresses as `Local`; everything
/// else resolves to `Unknown`.
pub struct LocalGeoProvider;

#[async_trait]
impl GeoIpLookup for LocalGeoProvider {
    async fn lookup(&self, ip: &str) -> GeoLocation {
        match ip.parse::<IpAddr>() {
            Ok(addr) if is_private_or_local(&addr) => GeoLocation::local(),
            _ => GeoLocation::unknown(),
        }
    }
}
