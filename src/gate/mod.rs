//! HTTP request gate
//!
//! Wires the firewall, request logging, and the config file handler into an
//! axum router. The firewall runs before any body is read.

pub mod handlers;
pub mod payload;

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::post;

use crate::firewall::AddressAllowlist;
use crate::middleware::{firewall_guard, log_request};

pub use crate::storage::ConfigFile;
pub use payload::ConfigFilesPayload;

pub const CONFIG_FILES_ROUTE: &str = "/api/v1/config-files";

/// State shared by every request task. Built once, never mutated.
#[derive(Debug)]
pub struct AppState {
    pub allowlist: Arc<AddressAllowlist>,
    pub output_root: PathBuf,
}

impl AppState {
    pub fn new(allowlist: AddressAllowlist, output_root: impl Into<PathBuf>) -> Self {
        Self {
            allowlist: Arc::new(allowlist),
            output_root: output_root.into(),
        }
    }
}

/// Builds the application router.
///
/// Layer order, outermost first: request logging, firewall, body limit, routes.
/// Unknown routes and wrong methods are answered only after the firewall.
pub fn build_app(state: Arc<AppState>, max_body_bytes: usize) -> Router {
    Router::new()
        .route(
            CONFIG_FILES_ROUTE,
            post(handlers::write_config_files).fallback(handlers::method_not_allowed),
        )
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(middleware::from_fn_with_state(state.clone(), firewall_guard))
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}
