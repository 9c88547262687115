//! Logging middleware
//!
//! Provides request logging functionality.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use log::info;

use super::firewall::peer_addr;

/// Log every incoming request with its peer, path and method
pub async fn log_request(request: Request, next: Next) -> Response {
    let (mut parts, body) = request.into_parts();
    info!(
        "Got request (remote-addr={}, request-path={}, http-method={})",
        peer_addr(&mut parts).await,
        parts.uri.path(),
        parts.method
    );
    next.run(Request::from_parts(parts, body)).await
}
