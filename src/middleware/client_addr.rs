use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::{HeaderMap, request::Parts};
use std::convert::Infallible;
use std::net::SocketAddr;

pub const UNKNOWN_ADDR: &str = "unknown";

/// Address of the caller, as text.
///
/// Resolution order:
/// - first entry of `X-Forwarded-For`
/// - peer address from `ConnectInfo`
/// - `"unknown"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientAddr(pub String);

fn forwarded_for(headers: &HeaderMap) -> Option<String> {
    let value = headers.get("x-forwarded-for")?.to_str().ok()?;
    let first = value.split(',').next()?.trim();
    (!first.is_empty()).then(|| first.to_string())
}

impl<S> FromRequestParts<S> for ClientAddr
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(addr) = forwarded_for(&parts.headers) {
            return Ok(Self(addr));
        }
        let addr = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(peer)| peer.ip().to_string())
            .unwrap_or_else(|| UNKNOWN_ADDR.to_string());
        Ok(Self(addr))
    }
}
