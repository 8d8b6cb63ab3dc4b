//! Cookie-authenticated HTTP client with transparent re-login.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::COOKIE;
use reqwest::{Method, StatusCode};
use tracing::{debug, instrument, trace, warn};

use aries_core::error::UpstreamRejection;
use aries_core::traits::{Authenticator, SessionStore};
use aries_core::{Result, Session, Upstream};

use crate::http::transport_error;

/// How many times a request may be replayed after logging in again.
const MAX_REAUTH_ATTEMPTS: u32 = 1;

/// A request to an upstream system.
///
/// The body is kept as a JSON value so the identical request can be replayed
/// after a re-login.
#[derive(Debug, Clone)]
pub struct UpstreamRequest {
    method: Method,
    url: String,
    body: Option<serde_json::Value>,
}

impl UpstreamRequest {
    /// Create a GET request with no body.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            url: url.into(),
            body: None,
        }
    }

    /// Create a POST request carrying a JSON body.
    pub fn post_json(url: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            method: Method::POST,
            url: url.into(),
            body: Some(body),
        }
    }
}

/// Outcome of a single HTTP exchange.
#[derive(Debug)]
enum Attempt {
    Success(String),
    Unauthorized { status: StatusCode, body: String },
    Rejected { status: StatusCode, body: String },
}

/// HTTP client for the catalog and public systems.
#[derive(Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    timeout: Duration,
    store: Arc<dyn SessionStore>,
    authenticator: Arc<dyn Authenticator>,
}

impl UpstreamClient {
    /// Create a client that draws cookies from `store` and logs in again
    /// through `authenticator` when a session is rejected.
    pub fn new(
        http: reqwest::Client,
        timeout: Duration,
        store: Arc<dyn SessionStore>,
        authenticator: Arc<dyn Authenticator>,
    ) -> Self {
        Self {
            http,
            timeout,
            store,
            authenticator,
        }
    }

    /// Returns the authenticator used for re-login.
    pub fn authenticator(&self) -> &Arc<dyn Authenticator> {
        &self.authenticator
    }

    /// Returns the session store requests draw cookies from.
    pub fn store(&self) -> &Arc<dyn SessionStore> {
        &self.store
    }

    /// Issue `request` against `system` and return the raw response body.
    ///
    /// A 401 or 403 triggers one login and one replay of the same request.
    /// A second 401/403, or any other non-2xx status, is returned as an
    /// [`UpstreamRejection`] carrying the response body. Transport failures,
    /// timeouts included, are never retried.
    #[instrument(skip(self, request), fields(method = %request.method, url = %request.url))]
    pub async fn call(&self, system: Upstream, request: &UpstreamRequest) -> Result<String> {
        let mut reauth_attempts = 0;

        loop {
            let session = self.store.get(system).await;
            match self.attempt(request, &session).await? {
                Attempt::Success(body) => return Ok(body),
                Attempt::Rejected { status, body } => {
                    debug!(%status, "Upstream rejected request");
                    return Err(UpstreamRejection::new(system, status.as_u16(), body).into());
                }
                Attempt::Unauthorized { status, body } => {
                    if reauth_attempts >= MAX_REAUTH_ATTEMPTS {
                        warn!(%status, "Still unauthorized after re-login");
                        return Err(UpstreamRejection::new(system, status.as_u16(), body).into());
                    }
                    reauth_attempts += 1;
                    let session_age_secs = session.age().map(|age| age.num_seconds());
                    warn!(%status, ?session_age_secs, "Session rejected, logging in again");
                    self.authenticator.login(system).await?;
                }
            }
        }
    }

    async fn attempt(&self, request: &UpstreamRequest, session: &Session) -> Result<Attempt> {
        let mut builder = self.http.request(request.method.clone(), &request.url);
        if let Some(cookies) = session.cookie_header() {
            builder = builder.header(COOKIE, cookies);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| transport_error(e, self.timeout))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| transport_error(e, self.timeout))?;
        trace!(%status, bytes = body.len(), "Upstream response");

        Ok(if status.is_success() {
            Attempt::Success(body)
        } else if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            Attempt::Unauthorized { status, body }
        } else {
            Attempt::Rejected { status, body }
        })
    }
}

impl std::fmt::Debug for UpstreamClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamClient")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_request_has_no_body() {
        let request = UpstreamRequest::get("https://forum.jstor.org/projects/1/assets");
        assert_eq!(request.method, Method::GET);
        assert!(request.body.is_none());
    }

    #[test]
    fn post_request_keeps_body_for_replay() {
        let body = serde_json::json!({"limit": 1});
        let request = UpstreamRequest::post_json("https://library.artstor.org/x", body.clone());
        let replay = request.clone();
        assert_eq!(replay.method, Method::POST);
        assert_eq!(replay.body, Some(body));
    }
}
