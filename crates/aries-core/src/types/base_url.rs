//! Upstream base URL type.

use std::fmt;
use url::Url;

use crate::error::{Error, InvalidInputError};

/// A validated base URL for an upstream system.
///
/// Base URLs must be absolute `http` or `https` URLs with a host. A trailing
/// slash is dropped so that [`BaseUrl::endpoint`] never produces `//`.
///
/// # Example
///
/// ```
/// use aries_core::BaseUrl;
///
/// let catalog = BaseUrl::new("https://forum.jstor.org/").unwrap();
/// assert_eq!(catalog.endpoint("/account"), "https://forum.jstor.org/account");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BaseUrl(Url);

impl BaseUrl {
    /// Create a new base URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not valid or doesn't meet requirements.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidInputError::BaseUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        Ok(Self(url))
    }

    /// Returns the absolute URL for a path below this base.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.as_str(), path.trim_start_matches('/'))
    }

    /// Returns the base URL as a string, without trailing slash.
    pub fn as_str(&self) -> &str {
        self.0.as_str().trim_end_matches('/')
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        if url.cannot_be_a_base() {
            return Err(InvalidInputError::BaseUrl {
                value: original.to_string(),
                reason: "must be an absolute URL".to_string(),
            }
            .into());
        }

        let scheme = url.scheme();
        if scheme != "https" && scheme != "http" {
            return Err(InvalidInputError::BaseUrl {
                value: original.to_string(),
                reason: "must use http or https".to_string(),
            }
            .into());
        }

        if url.host_str().is_none() {
            return Err(InvalidInputError::BaseUrl {
                value: original.to_string(),
                reason: "must have a host".to_string(),
            }
            .into());
        }

        if url.query().is_some() || url.fragment().is_some() {
            return Err(InvalidInputError::BaseUrl {
                value: original.to_string(),
                reason: "must not carry a query or fragment".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_https_url() {
        let base = BaseUrl::new("https://forum.jstor.org").unwrap();
        assert_eq!(base.to_string(), "https://forum.jstor.org");
    }

    #[test]
    fn plain_http_is_allowed() {
        let base = BaseUrl::new("http://127.0.0.1:8080").unwrap();
        assert_eq!(base.as_str(), "http://127.0.0.1:8080");
    }

    #[test]
    fn endpoint_construction() {
        let base = BaseUrl::new("https://library.artstor.org").unwrap();
        assert_eq!(
            base.endpoint("api/secure/userinfo"),
            "https://library.artstor.org/api/secure/userinfo"
        );
    }

    #[test]
    fn normalizes_trailing_slash() {
        let base = BaseUrl::new("https://library.artstor.org/").unwrap();
        assert_eq!(base.as_str(), "https://library.artstor.org");
        assert_eq!(
            base.endpoint("/api/secure/userinfo"),
            "https://library.artstor.org/api/secure/userinfo"
        );
    }

    #[test]
    fn keeps_path_prefix() {
        let base = BaseUrl::new("https://example.org/forum/").unwrap();
        assert_eq!(base.endpoint("/account"), "https://example.org/forum/account");
    }

    #[test]
    fn invalid_relative_url() {
        assert!(BaseUrl::new("/projects/1/assets").is_err());
    }

    #[test]
    fn invalid_scheme() {
        assert!(BaseUrl::new("ftp://forum.jstor.org").is_err());
        assert!(BaseUrl::new("file:///tmp/catalog").is_err());
    }

    #[test]
    fn rejects_query_string() {
        assert!(BaseUrl::new("https://forum.jstor.org/?a=b").is_err());
    }
}
