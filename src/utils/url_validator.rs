//! Target URL validation.
//!
//! Ensures only absolute HTTP(S) URLs with a real host get shortened, and
//! flags internal hosts so callers can audit-log them.

use std::net::Ipv4Addr;
use url::{Host, Url};

/// Errors that can occur during URL validation.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must have a host")]
    MissingHost,
}

/// Validates a target URL.
///
/// # Rules
///
/// 1. Must parse as an absolute URL
/// 2. Scheme must be `http` or `https` (rejects `javascript:`, `data:`,
///    `file:`, and friends)
/// 3. Must have a non-empty host
///
/// Internal hosts (localhost, loopback, RFC 1918 ranges) are accepted;
/// use [`is_internal_host`] to flag them for audit logging.
///
/// # Errors
///
/// Returns [`UrlValidationError::InvalidFormat`] for malformed URLs,
/// [`UrlValidationError::UnsupportedProtocol`] for non-HTTP(S) schemes,
/// [`UrlValidationError::MissingHost`] when no host is present.
pub fn validate_url(input: &str) -> Result<Url, UrlValidationError> {
    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => {}
        _ => return Err(UrlValidationError::MissingHost),
    }

    Ok(url)
}

/// Returns true when the URL points at an internal host: `localhost`,
/// a loopback address, or a private IPv4 range.
///
/// Such targets are accepted but worth noting in audit logs, since a
/// public short link resolving into someone's intranet is usually a
/// mistake.
pub fn is_internal_host(url: &Url) -> bool {
    match url.host() {
        Some(Host::Domain(domain)) => domain.eq_ignore_ascii_case("localhost"),
        Some(Host::Ipv4(addr)) => addr.is_loopback() || is_private_ipv4(addr),
        Some(Host::Ipv6(addr)) => addr.is_loopback(),
        None => false,
    }
}

fn is_private_ipv4(addr: Ipv4Addr) -> bool {
    addr.is_private()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(validate_url("http://example.com").is_ok());
        assert!(validate_url("https://example.com/path?q=1").is_ok());
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(matches!(
            validate_url("not-a-url").unwrap_err(),
            UrlValidationError::InvalidFormat(_)
        ));
        assert!(matches!(
            validate_url("").unwrap_err(),
            UrlValidationError::InvalidFormat(_)
        ));
        assert!(matches!(
            validate_url("example.com").unwrap_err(),
            UrlValidationError::InvalidFormat(_)
        ));
    }

    #[test]
    fn test_rejects_unsupported_schemes() {
        for input in [
            "ftp://example.com/file.txt",
            "javascript:alert('xss')",
            "data:text/plain,hello",
            "file:///etc/passwd",
            "mailto:test@example.com",
        ] {
            assert!(
                matches!(
                    validate_url(input).unwrap_err(),
                    UrlValidationError::UnsupportedProtocol
                ),
                "expected scheme rejection for {}",
                input
            );
        }
    }

    #[test]
    fn test_rejects_host_less_urls() {
        // The url crate already refuses empty hosts for http(s) at parse
        // time, so these surface as format errors.
        assert!(validate_url("http://").is_err());
        assert!(validate_url("http:///path-only").is_err());
    }

    #[test]
    fn test_internal_hosts_are_accepted_but_flagged() {
        for input in [
            "http://localhost:3000/test",
            "http://127.0.0.1/admin",
            "http://192.168.1.1:8080/router",
            "http://10.0.0.5/internal",
        ] {
            let url = validate_url(input).unwrap();
            assert!(is_internal_host(&url), "expected internal flag for {}", input);
        }
    }

    #[test]
    fn test_public_hosts_are_not_flagged() {
        for input in [
            "https://example.com",
            "https://www.rust-lang.org/learn",
            "http://8.8.8.8/",
        ] {
            let url = validate_url(input).unwrap();
            assert!(!is_internal_host(&url), "unexpected internal flag for {}", input);
        }
    }
}
