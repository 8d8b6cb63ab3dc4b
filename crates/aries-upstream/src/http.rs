//! Shared reqwest plumbing.

use std::time::Duration;

use aries_core::error::TransportError;
use aries_core::{Result, Session, SessionCookie};

/// Every outbound call is bounded by this timeout.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Build the HTTP client shared by the authenticator and upstream client.
pub(crate) fn build_client(timeout: Duration) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(concat!("aries-jstor/", env!("CARGO_PKG_VERSION")))
        .timeout(timeout)
        .build()
        .map_err(|e| {
            TransportError::Http {
                message: format!("failed to build HTTP client: {e}"),
            }
            .into()
        })
}

/// Classify a reqwest failure.
pub(crate) fn transport_error(err: reqwest::Error, timeout: Duration) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout {
            duration_ms: timeout.as_millis() as u64,
        }
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    }
}

/// Capture every cookie set by a response as a fresh session.
pub(crate) fn session_from(response: &reqwest::Response) -> Session {
    let cookies = response
        .cookies()
        .map(|c| SessionCookie::new(c.name(), c.value()))
        .collect();
    Session::new(cookies)
}
