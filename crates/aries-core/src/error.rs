//! Error types for the Aries JSTOR gateway.
//!
//! This module provides a unified error type with explicit variants for
//! transport, authentication, upstream rejection, lookup and input
//! validation errors.

use std::fmt;
use thiserror::Error;

use crate::types::Upstream;

/// The unified error type for gateway operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (DNS, TLS, connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Login handshake errors.
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Non-2xx response from an upstream system.
    #[error("upstream rejected request: {0}")]
    Rejected(#[from] UpstreamRejection),

    /// No filter produced an unambiguous single match.
    #[error("{identifier} not found")]
    NotFound { identifier: String },

    /// An upstream response body could not be decoded.
    #[error("unable to parse {system} response: {message}")]
    Decode { system: Upstream, message: String },

    /// Input validation errors (bad URL, bad configuration value).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

impl Error {
    /// Returns true if this error means the requested identifier has no match.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out after {duration_ms}ms")]
    Timeout { duration_ms: u64 },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// Login handshake errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The login request never produced a response.
    #[error("{system} login failed: {source}")]
    Handshake {
        system: Upstream,
        #[source]
        source: TransportError,
    },
}

/// A non-2xx response from an upstream system.
#[derive(Debug)]
pub struct UpstreamRejection {
    /// The system that rejected the request.
    pub system: Upstream,
    /// HTTP status code.
    pub status: u16,
    /// Raw response body, kept as error context.
    pub body: String,
}

impl UpstreamRejection {
    /// Create a new rejection.
    pub fn new(system: Upstream, status: u16, body: impl Into<String>) -> Self {
        Self {
            system,
            status,
            body: body.into(),
        }
    }

    /// Check if the upstream refused the session (401 or 403).
    pub fn is_auth_failure(&self) -> bool {
        self.status == 401 || self.status == 403
    }
}

impl fmt::Display for UpstreamRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} HTTP {}", self.system, self.status)?;
        if !self.body.is_empty() {
            write!(f, ": {}", self.body)?;
        }
        Ok(())
    }
}

impl std::error::Error for UpstreamRejection {}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid base URL.
    #[error("invalid base URL '{value}': {reason}")]
    BaseUrl { value: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_display_includes_status_and_body() {
        let err = UpstreamRejection::new(Upstream::Catalog, 500, "boom");
        assert_eq!(err.to_string(), "catalog HTTP 500: boom");
    }

    #[test]
    fn rejection_detects_auth_failures() {
        assert!(UpstreamRejection::new(Upstream::Public, 401, "").is_auth_failure());
        assert!(UpstreamRejection::new(Upstream::Public, 403, "").is_auth_failure());
        assert!(!UpstreamRejection::new(Upstream::Public, 404, "").is_auth_failure());
    }

    #[test]
    fn not_found_message_names_identifier() {
        let err = Error::NotFound {
            identifier: "23760225".to_string(),
        };
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "23760225 not found");
    }
}
