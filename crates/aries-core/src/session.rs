//! Cookie-backed upstream sessions.

use chrono::{DateTime, TimeDelta, Utc};
use std::fmt;

/// A single opaque cookie captured from a login response.
///
/// # Security
///
/// - Never logged or displayed in Debug output
/// - Treat as opaque; do not parse or inspect
#[derive(Clone, PartialEq, Eq)]
pub struct SessionCookie {
    name: String,
    value: String,
}

impl SessionCookie {
    /// Create a new cookie.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Returns the cookie name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the cookie value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Debug for SessionCookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionCookie")
            .field("name", &self.name)
            .field("value", &"[REDACTED]")
            .finish()
    }
}

/// The authenticated cookie set for one upstream system.
///
/// A session is replaced wholesale by every login; it is never merged.
#[derive(Clone, Debug)]
pub struct Session {
    cookies: Vec<SessionCookie>,
    established_at: Option<DateTime<Utc>>,
}

impl Session {
    /// A session holding no cookies, used before the first login.
    pub fn empty() -> Self {
        Self {
            cookies: Vec::new(),
            established_at: None,
        }
    }

    /// A session established now from the given cookies.
    pub fn new(cookies: Vec<SessionCookie>) -> Self {
        Self {
            cookies,
            established_at: Some(Utc::now()),
        }
    }

    /// Returns the cookies in the order the upstream sent them.
    pub fn cookies(&self) -> &[SessionCookie] {
        &self.cookies
    }

    /// Returns true if no cookies are held.
    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }

    /// Time elapsed since the login that produced this session.
    pub fn age(&self) -> Option<TimeDelta> {
        self.established_at.map(|at| Utc::now() - at)
    }

    /// Renders the cookies as a single `Cookie` request header value.
    ///
    /// Returns `None` for an empty session.
    pub fn cookie_header(&self) -> Option<String> {
        if self.cookies.is_empty() {
            return None;
        }
        let pairs: Vec<String> = self
            .cookies
            .iter()
            .map(|c| format!("{}={}", c.name, c.value))
            .collect();
        Some(pairs.join("; "))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_session_has_no_header() {
        let session = Session::empty();
        assert!(session.is_empty());
        assert!(session.cookie_header().is_none());
        assert!(session.age().is_none());
    }

    #[test]
    fn cookie_header_joins_all_cookies() {
        let session = Session::new(vec![
            SessionCookie::new("JSESSIONID", "abc"),
            SessionCookie::new("AWSALB", "xyz"),
        ]);
        assert_eq!(
            session.cookie_header().as_deref(),
            Some("JSESSIONID=abc; AWSALB=xyz")
        );
    }

    #[test]
    fn fresh_session_has_small_age() {
        let session = Session::new(vec![SessionCookie::new("JSESSIONID", "abc")]);
        let age = session.age().unwrap();
        assert!(age >= TimeDelta::zero());
        assert!(age < TimeDelta::seconds(5));
    }

    #[test]
    fn cookie_hides_value_in_debug() {
        let session = Session::new(vec![SessionCookie::new("JSESSIONID", "topsecret")]);
        let debug = format!("{:?}", session);
        assert!(debug.contains("JSESSIONID"));
        assert!(!debug.contains("topsecret"));
        assert!(debug.contains("[REDACTED]"));
    }
}
