//! DTOs for the link creation endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a URL.
///
/// Field-level checks here are shallow; the real rules (URL shape,
/// shortcode format, validity bounds) are enforced in the service layer
/// with precise error messages.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten (must be an absolute HTTP/HTTPS URL).
    #[validate(length(min = 1, message = "URL must not be empty"))]
    pub url: String,

    /// Optional lifetime in minutes (1 to 525600); defaults to 30.
    pub validity: Option<i64>,

    /// Optional caller-chosen shortcode (3-20 alphanumeric characters).
    pub shortcode: Option<String>,
}

/// Response for a created short link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub short_link: String,
    pub expiry: DateTime<Utc>,
}
