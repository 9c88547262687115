//! Request handlers for the config writer API.
//!
//! These run only after the firewall middleware has authorized the peer.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use log::info;

use super::AppState;
use super::payload::ConfigFilesPayload;
use crate::error::GateError;
use crate::storage::write_batch;

/// Handles `POST /api/v1/config-files`: parses the batch, validates every
/// path, then writes the files beneath the output root.
pub async fn write_config_files(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<StatusCode, GateError> {
    let body = body?;
    let payload = ConfigFilesPayload::from_slice(&body)?;

    let root = state.output_root.clone();
    let result =
        tokio::task::spawn_blocking(move || write_batch(&root, &payload.files)).await??;

    info!("Success ({} files written)", result.len());
    Ok(StatusCode::OK)
}

/// Fallback for any method other than POST on the config file route.
pub async fn method_not_allowed() -> GateError {
    GateError::MethodNotAllowed
}
