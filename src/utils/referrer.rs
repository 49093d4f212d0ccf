//! Referrer header reduction.

use url::Url;

/// Marker for clicks arriving without a Referer header.
pub const DIRECT_REFERRER: &str = "direct";

/// Marker for a Referer header that could not be parsed.
pub const UNKNOWN_REFERRER: &str = "unknown";

/// Reduces a raw Referer header to the referring page's hostname.
///
/// Returns `"direct"` when the header is absent and `"unknown"` when the
/// header is present but not a parseable URL with a host.
pub fn referrer_host(raw: Option<&str>) -> String {
    match raw {
        None => DIRECT_REFERRER.to_string(),
        Some(value) => Url::parse(value)
            .ok()
            .and_then(|url| url.host_str().map(str::to_string))
            .unwrap_or_else(|| UNKNOWN_REFERRER.to_string()),
    }
}
