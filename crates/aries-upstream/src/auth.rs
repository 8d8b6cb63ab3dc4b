//! Login handshakes for the catalog and public systems.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{info, instrument, warn};

use aries_core::error::AuthError;
use aries_core::traits::{Authenticator, SessionStore};
use aries_core::{BaseUrl, Credentials, Result, Session, Upstream};

use crate::endpoints::{CATALOG_LOGIN, PUBLIC_SESSION};
use crate::http::{session_from, transport_error};

/// Authenticator that logs in over HTTP and writes into a [`SessionStore`].
pub struct HttpAuthenticator {
    http: reqwest::Client,
    timeout: Duration,
    catalog: BaseUrl,
    public: BaseUrl,
    credentials: Credentials,
    store: Arc<dyn SessionStore>,
}

impl HttpAuthenticator {
    pub fn new(
        http: reqwest::Client,
        timeout: Duration,
        catalog: BaseUrl,
        public: BaseUrl,
        credentials: Credentials,
        store: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            http,
            timeout,
            catalog,
            public,
            credentials,
            store,
        }
    }

    async fn catalog_login(&self) -> std::result::Result<reqwest::Response, reqwest::Error> {
        let form = [
            ("email", self.credentials.email()),
            ("password", self.credentials.password()),
        ];
        self.http
            .post(self.catalog.endpoint(CATALOG_LOGIN))
            .form(&form)
            .send()
            .await
    }

    async fn public_session(&self) -> std::result::Result<reqwest::Response, reqwest::Error> {
        self.http
            .get(self.public.endpoint(PUBLIC_SESSION))
            .send()
            .await
    }
}

#[async_trait]
impl Authenticator for HttpAuthenticator {
    #[instrument(skip(self), fields(email = %self.credentials.email()))]
    async fn login(&self, system: Upstream) -> Result<Session> {
        info!("Logging in");

        let response = match system {
            Upstream::Catalog => self.catalog_login().await,
            Upstream::Public => self.public_session().await,
        }
        .map_err(|e| AuthError::Handshake {
            system,
            source: transport_error(e, self.timeout),
        })?;

        // The upstreams do not signal bad credentials through the status
        // code, so whatever cookies came back become the session.
        let status = response.status();
        if !status.is_success() {
            warn!(%status, "Login answered with non-success status");
        }

        let session = session_from(&response);
        if session.is_empty() {
            warn!("Login set no cookies");
        }

        self.store.replace(system, session.clone()).await;
        info!(cookies = session.cookies().len(), "Session established");
        Ok(session)
    }
}

impl std::fmt::Debug for HttpAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpAuthenticator")
            .field("catalog", &self.catalog)
            .field("public", &self.public)
            .field("credentials", &self.credentials)
            .finish()
    }
}
