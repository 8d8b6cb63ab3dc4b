//! Seams between the upstream client and its session collaborators.

mod authenticator;
mod session_store;

pub use authenticator::Authenticator;
pub use session_store::SessionStore;
