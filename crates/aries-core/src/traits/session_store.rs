//! Session store trait.

use async_trait::async_trait;

use crate::Session;
use crate::types::Upstream;

/// Holds the current authenticated session for each upstream system.
///
/// Staleness is never tracked here; callers find out through a 401 or 403
/// and replace the entry after logging in again.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Returns the current session for `system`, empty if none was stored.
    async fn get(&self, system: Upstream) -> Session;

    /// Overwrites the session for `system`.
    async fn replace(&self, system: Upstream, session: Session);
}
