//! Request-boundary failures.
//!
//! Everything here is recovered at the boundary; nothing is fatal to the
//! process. A body that fails to parse as JSON gets the dedicated code-5
//! envelope before any verb logic runs; store-internal faults are the one
//! case the service answers with a transport-level 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

use super::response::ApiStatus;

/// Result type for route handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request claimed a body but it is not valid JSON.
    #[error("invalid JSON in request body: {0}")]
    MalformedBody(String),

    /// The store failed mid-operation (distinct from never-connected).
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Body of the code-5 parse-failure response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseErrorEnvelope {
    pub error_message: String,
    pub status_code: u8,
    pub status_text: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::MalformedBody(message) => {
                let status = ApiStatus::MalformedBody;
                let body = ParseErrorEnvelope {
                    error_message: message,
                    status_code: status.code(),
                    status_text: status.text(),
                };
                (StatusCode::OK, Json(body)).into_response()
            }
            ApiError::Store(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("internal store failure: {}", err),
            )
                .into_response(),
        }
    }
}
