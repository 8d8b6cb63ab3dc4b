//! Authenticator trait.

use async_trait::async_trait;

use crate::types::Upstream;
use crate::{Result, Session};

/// Performs the login handshake for an upstream system.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Log in to `system` and store the resulting session.
    ///
    /// Only transport failures are errors; an upstream that answers with a
    /// non-2xx status still yields whatever cookies it set.
    async fn login(&self, system: Upstream) -> Result<Session>;
}
