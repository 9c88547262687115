//! Error types
//!
//! Defines domain-specific error types for each module of the config writer.

use std::path::PathBuf;

use axum::extract::rejection::BytesRejection;
use thiserror::Error;

/// Firewall module errors
///
/// Raised only while building the allowlist; per-request evaluation never fails.
#[derive(Debug, Error)]
pub enum FirewallError {
    #[error("parsing prefix {token:?}: {source}")]
    InvalidPrefix {
        token: String,
        #[source]
        source: ipnet::AddrParseError,
    },

    #[error("parsing prefix {token:?}: bad prefix length")]
    InvalidPrefixLength { token: String },
}

/// Storage module errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Refusing to write file outside root: {0:?}")]
    OutsideRoot(String),

    #[error("Refusing to write file through symbolic link: {0:?}")]
    SymlinkInPath(String),

    #[error("Error inspecting path: {path:?}")]
    InspectPath {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Error creating directory for path: {path:?}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error writing file at path: {path:?}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StorageError {
    /// True when the client asked for a path the server refuses to touch.
    pub fn is_containment_violation(&self) -> bool {
        matches!(
            self,
            StorageError::OutsideRoot(_) | StorageError::SymlinkInPath(_)
        )
    }
}

/// Request gate errors. Each variant maps onto one HTTP response.
#[derive(Debug, Error)]
pub enum GateError {
    #[error("Access denied")]
    Forbidden,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Request body too large")]
    BodyTooLarge(#[source] BytesRejection),

    #[error("Failed to read request body")]
    BodyRead(#[source] BytesRejection),

    #[error("Failed to parse request body")]
    BodyParse(#[from] serde_json::Error),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("File writer task failed")]
    WriteTask(#[from] tokio::task::JoinError),
}

impl From<BytesRejection> for GateError {
    fn from(rejection: BytesRejection) -> Self {
        if rejection.status() == axum::http::StatusCode::PAYLOAD_TOO_LARGE {
            GateError::BodyTooLarge(rejection)
        } else {
            GateError::BodyRead(rejection)
        }
    }
}
