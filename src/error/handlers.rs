//! Error handlers
//!
//! Converts gate errors into HTTP responses.

use std::error::Error as _;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::info;

use crate::error::types::GateError;

/// Convert error to HTTP status code
pub fn error_to_status_code(err: &GateError) -> StatusCode {
    match err {
        GateError::Forbidden => StatusCode::FORBIDDEN,
        GateError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        GateError::BodyTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
        GateError::BodyRead(_) => StatusCode::INTERNAL_SERVER_ERROR,
        GateError::BodyParse(_) => StatusCode::BAD_REQUEST,
        GateError::Storage(e) if e.is_containment_violation() => StatusCode::BAD_REQUEST,
        GateError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        GateError::WriteTask(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for GateError {
    fn into_response(self) -> Response {
        let code = error_to_status_code(&self);
        let message = self.to_string();
        match self.source() {
            Some(source) => info!("{} (response-code={}, error={})", message, code.as_u16(), source),
            None => info!("{} (response-code={})", message, code.as_u16()),
        }
        (code, format!("{}\n", message)).into_response()
    }
}
