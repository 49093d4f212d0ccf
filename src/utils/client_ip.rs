//! Client IP extraction and classification.

use axum::http::HeaderMap;
use std::net::{IpAddr, SocketAddr};

/// Picks the client address for a request.
///
/// Direct deployments use the peer socket address; behind a trusted
/// reverse proxy (`behind_proxy`) the forwarded headers are consulted
/// first, falling back to the peer when they are missing. Trusting
/// forwarded headers on a directly exposed service would let clients
/// forge their address, so the flag is opt-in.
pub fn client_ip(headers: &HeaderMap, peer: SocketAddr, behind_proxy: bool) -> String {
    if behind_proxy
        && let Some(forwarded) = forwarded_ip(headers)
    {
        return forwarded;
    }

    peer.ip().to_string()
}

/// Reads the forwarded client IP: the first X-Forwarded-For entry, then
/// X-Real-IP.
fn forwarded_ip(headers: &HeaderMap) -> Option<String> {
    headers
        .get("x-forwarded-for")
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.split(',').next())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .or_else(|| {
            headers
                .get("x-real-ip")
                .and_then(|h| h.to_str().ok())
                .map(String::from)
        })
}

/// Returns true for loopback and private-range addresses.
pub fn is_private_or_local(ip: &IpAddr) -> bool {
    match ip {
        IpAddr::V4(v4) => v4.is_private() || v4.is_loopback(),
        IpAddr::V6(v6) => {
            // fc00::/7 (ULA), fe80::/10 (link-local), ::1 (loopback)
            v6.is_loopback()
                || (v6.segments()[0] & 0xfe00) == 0xfc00
                || (v6.segments()[0] & 0xffc0) == 0xfe80
        }
    }
}
