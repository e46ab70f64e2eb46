//! Client IP extraction, shape validation, and octet reversal
//!
//! Extraction trusts the leftmost `X-Forwarded-For` entry without proxy
//! chain validation and falls back to the socket peer address. Validation
//! checks the dotted-quad shape only: octet values are not range-checked
//! ("999.999.999.999" passes) and IPv6 is not supported.

use axum::http::HeaderMap;
use regex::Regex;
use std::net::SocketAddr;
use std::sync::LazyLock;

static IPV4_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}$").unwrap());

/// The IP every malformed candidate normalizes to.
pub const FALLBACK_IP: &str = "0.0.0.0";

/// Extract the candidate client IP from `X-Forwarded-For`, falling back to
/// the socket peer address. With multiple forwarded entries the leftmost one
/// is taken, trimmed.
pub fn extract_candidate_ip(headers: &HeaderMap, peer_addr: SocketAddr) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|h| h.to_str().ok())
        .map(|xff| {
            xff.split(',')
                .next()
                .unwrap_or(xff)
                .trim()
                .to_string()
        })
        .unwrap_or_else(|| peer_addr.ip().to_string())
}

/// Pass a dotted-quad-shaped candidate through unchanged; replace anything
/// else with `"0.0.0.0"`.
pub fn normalize_ip(candidate: &str) -> String {
    if IPV4_SHAPE.is_match(candidate) {
        candidate.to_string()
    } else {
        FALLBACK_IP.to_string()
    }
}

/// Reverse the four dot-separated groups: `"1.2.3.4"` becomes `"4.3.2.1"`.
pub fn reverse_octets(ip: &str) -> String {
    ip.split('.').rev().collect::<Vec<_>>().join(".")
}
