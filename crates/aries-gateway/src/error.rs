//! Mapping of resolution errors onto HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use aries_core::Error;

/// Handler error; rendered as a plain-text body.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            Error::NotFound { .. } => StatusCode::NOT_FOUND,
            Error::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Error::Transport(_) | Error::Auth(_) | Error::Rejected(_) | Error::Decode { .. } => {
                StatusCode::BAD_GATEWAY
            }
        };
        if status.is_server_error() {
            error!(error = %self.0, "Lookup failed");
        }
        (status, self.0.to_string()).into_response()
    }
}
