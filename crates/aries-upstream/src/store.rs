//! In-memory session store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use aries_core::traits::SessionStore;
use aries_core::{Session, Upstream};

/// Process-wide session store shared by every in-flight request.
///
/// A refresh made by one request is visible to the next. Two concurrent
/// refreshes race harmlessly: the later `replace` wins wholesale.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    sessions: RwLock<HashMap<Upstream, Session>>,
}

impl MemorySessionStore {
    /// Create an empty store; every system starts with no session.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn get(&self, system: Upstream) -> Session {
        self.sessions
            .read()
            .await
            .get(&system)
            .cloned()
            .unwrap_or_default()
    }

    async fn replace(&self, system: Upstream, session: Session) {
        debug!(%system, cookies = session.cookies().len(), "Replacing session");
        self.sessions.write().await.insert(system, session);
    }
}
