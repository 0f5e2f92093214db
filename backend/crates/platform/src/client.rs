//! Client identification utilities
//!
//! Resolves the caller's address for rate-limit keys. Proxy headers are
//! trusted as-is; deploy behind a proxy that overwrites them.

use axum::http::HeaderMap;
use std::net::IpAddr;

/// Key component used when no address can be determined
pub const UNKNOWN_CLIENT: &str = "unknown";

/// Extract client IP address from headers
///
/// Order: first entry of `X-Forwarded-For`, then `X-Real-IP`, then the
/// direct connection address.
pub fn extract_client_ip(headers: &HeaderMap, direct_ip: Option<IpAddr>) -> Option<IpAddr> {
    let forwarded = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|xff| xff.split(',').next())
        .and_then(|first| first.trim().parse::<IpAddr>().ok());

    if forwarded.is_some() {
        return forwarded;
    }

    let real_ip = headers
        .get("x-real-ip")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<IpAddr>().ok());

    real_ip.or(direct_ip)
}

/// Build a rate-limit key such as `subscribe:203.0.113.7`
pub fn rate_limit_key(purpose: &str, client_ip: Option<IpAddr>) -> String {
    match client_ip {
        Some(ip) => format!("{purpose}:{ip}"),
        None => format!("{purpose}:{UNKNOWN_CLIENT}"),
    }
}
