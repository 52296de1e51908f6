//! Error handling for the India Tools API
//!
//! Every failure leaves the service as `{"error": <message>}` with a status code
//! chosen by [`ApiError::status_code`]. Malformed bodies and calculator validation
//! failures share the same 400 shape.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tools_calculator::{CalcError, RegistryError};

pub const NOT_FOUND_MESSAGE: &str = "Endpoint not found";

#[derive(Error, Debug)]
pub enum ApiError {
    /// Bad input of any kind (400 Bad Request)
    #[error("{message}")]
    InvalidInput { message: String },

    /// Unknown route or calculator (404 Not Found)
    #[error("{}", NOT_FOUND_MESSAGE)]
    NotFound { resource: String },

    /// Body over the configured limit (413 Payload Too Large)
    #[error("Request body too large")]
    PayloadTooLarge,

    /// Known route, wrong HTTP method (405 Method Not Allowed)
    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput { message: message.into() }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound { resource: resource.into() }
    }
}

/// JSON body of every error response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(ErrorBody { error: self.to_string() })).into_response()
    }
}

impl From<CalcError> for ApiError {
    fn from(err: CalcError) -> Self {
        match err {
            CalcError::InvalidInput(message) => ApiError::InvalidInput { message },
        }
    }
}

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::UnknownCalculator(name) => ApiError::not_found(name),
            RegistryError::Calculation(err) => err.into(),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
