//! Firewall middleware
//!
//! Rejects unauthorized peers before any handler or body extractor runs.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{ConnectInfo, FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use log::info;

use crate::error::GateError;
use crate::gate::AppState;

/// Raw `address:port` of the connection, or an empty string when the
/// transport did not record one.
///
/// Goes through the `ConnectInfo` extractor so `MockConnectInfo` is honored.
pub async fn peer_addr(parts: &mut Parts) -> String {
    ConnectInfo::<SocketAddr>::from_request_parts(parts, &())
        .await
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_default()
}

pub async fn firewall_guard(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    let (mut parts, body) = request.into_parts();
    let remote_addr = peer_addr(&mut parts).await;
    if let Some(reason) = state.allowlist.evaluate(&remote_addr).deny_reason() {
        info!("Denying {:?}: {}", remote_addr, reason);
        return GateError::Forbidden.into_response();
    }
    next.run(Request::from_parts(parts, body)).await
}
