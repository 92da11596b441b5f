//! Client network address extraction for rate limiting.

use std::net::SocketAddr;

use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::request::Parts;

use crate::state::AppState;

/// The client's network address as an opaque rate-limit identifier.
///
/// Prefers the first entry of `x-forwarded-for` (set by the reverse
/// proxy in production), then `x-real-ip`, then the socket peer
/// address. Extraction never fails; with no information at all the
/// identifier degrades to `"unknown"`, which collapses such clients
/// into one bucket rather than rejecting them.
#[derive(Debug, Clone)]
pub struct ClientIp(pub String);

impl FromRequestParts<AppState> for ClientIp {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(forwarded) = parts
            .headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
        {
            if let Some(first) = forwarded.split(',').next() {
                let first = first.trim();
                if !first.is_empty() {
                    return Ok(ClientIp(first.to_string()));
                }
            }
        }

        if let Some(real_ip) = parts
            .headers
            .get("x-real-ip")
            .and_then(|v| v.to_str().ok())
        {
            let real_ip = real_ip.trim();
            if !real_ip.is_empty() {
                return Ok(ClientIp(real_ip.to_string()));
            }
        }

        if let Some(ConnectInfo(addr)) = parts.extensions.get::<ConnectInfo<SocketAddr>>() {
            return Ok(ClientIp(addr.ip().to_string()));
        }

        Ok(ClientIp("unknown".to_string()))
    }
}
