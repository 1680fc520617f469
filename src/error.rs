//! Error types for the translation catalog
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ResponseMessage;

// == Api Error Enum ==
/// Unified error type for the translation catalog.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The requested entity does not exist
    #[error("{0}")]
    NotFound(String),

    /// The request data failed validation
    #[error("{0}")]
    InvalidRequest(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, description) = match &self {
            ApiError::NotFound(_) => {
                (StatusCode::NOT_FOUND, "The requested entity was not found")
            }
            ApiError::InvalidRequest(_) => {
                (StatusCode::BAD_REQUEST, "The request could not be processed as written")
            }
            ApiError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Analyze the logs to determine the cause")
            }
        };

        let body = Json(ResponseMessage::new(status.as_u16(), self.to_string(), description));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the translation catalog.
pub type Result<T> = std::result::Result<T, ApiError>;
