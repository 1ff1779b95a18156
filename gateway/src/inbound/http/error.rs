//! Request-boundary error type and its HTTP status mapping.
//!
//! Every failure class a request can hit maps onto exactly one status code
//! here, so the translation from outcome to response is total. Failure
//! bodies are empty: the status code is the contract, and internal error
//! text must not reach clients as something they could parse as a payload.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;
use tracing::{error, warn};

use crate::domain::StoreError;

/// Outcome of one request pipeline, short of success.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request body or query string could not be decoded.
    #[error("could not decode request: {0}")]
    Decode(String),
    /// The request decoded but carries an unusable pagination range.
    #[error("invalid pagination range: {0}")]
    InvalidRange(String),
    /// A request field failed a configured validation rule.
    #[error("invalid request: {0}")]
    Validation(String),
    /// The store service could not be reached.
    #[error("store service is unreachable: {0}")]
    Unavailable(String),
    /// The store service reported a failure for a well-formed call.
    #[error("store service failed: {0}")]
    Upstream(String),
    /// The response payload could not be serialised.
    #[error("could not encode response: {0}")]
    Encoding(String),
}

impl ApiError {
    /// Wrap a decoding failure, keeping only its message.
    pub fn decode(err: impl std::fmt::Display) -> Self {
        Self::Decode(err.to_string())
    }

    /// Wrap a serialisation failure, keeping only its message.
    pub fn encoding(err: impl std::fmt::Display) -> Self {
        Self::Encoding(err.to_string())
    }

    /// Log the failure with its route context and hand the error back.
    ///
    /// Handlers call this once at their outer edge, so every failure class
    /// is logged exactly once and always carries the route it hit.
    #[must_use]
    pub fn logged(self, route: &str) -> Self {
        let status = self.status_code();
        if status.is_server_error() {
            error!(route, %status, error = %self, "request failed");
        } else {
            warn!(route, %status, error = %self, "request rejected");
        }
        self
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Transport { message } => Self::Unavailable(message),
            StoreError::Backend { message } => Self::Upstream(message),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Decode(_) | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::InvalidRange(_) => StatusCode::RANGE_NOT_SATISFIABLE,
            Self::Unavailable(_) => StatusCode::BAD_GATEWAY,
            Self::Upstream(_) | Self::Encoding(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).finish()
    }
}

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;
