//! Shared handler state.

use std::sync::Arc;

use aries_upstream::Resolver;

/// State handed to every request handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub resolver: Arc<Resolver>,
}

impl AppState {
    pub fn new(resolver: Resolver) -> Self {
        Self {
            resolver: Arc::new(resolver),
        }
    }
}
