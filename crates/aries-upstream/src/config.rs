//! Upstream connection settings.

use std::time::Duration;

use aries_core::{BaseUrl, Credentials};

use crate::http::REQUEST_TIMEOUT;

/// Where the upstream systems live and how to log in to them.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub catalog_url: BaseUrl,
    pub public_url: BaseUrl,
    /// Catalog project whose assets are searched.
    pub project: String,
    pub credentials: Credentials,
    pub timeout: Duration,
}

impl UpstreamConfig {
    pub fn new(
        catalog_url: BaseUrl,
        public_url: BaseUrl,
        project: impl Into<String>,
        credentials: Credentials,
    ) -> Self {
        Self {
            catalog_url,
            public_url,
            project: project.into(),
            credentials,
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Override the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_ten_second_timeout() {
        let config = UpstreamConfig::new(
            BaseUrl::new("https://forum.jstor.org").unwrap(),
            BaseUrl::new("https://library.artstor.org").unwrap(),
            "1234",
            Credentials::new("a@b.c", "pw"),
        );
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(
            config.with_timeout(Duration::from_millis(50)).timeout,
            Duration::from_millis(50)
        );
    }
}
