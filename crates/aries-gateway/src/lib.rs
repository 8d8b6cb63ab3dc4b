//! aries-gateway - HTTP front end for Aries identifier lookups against
//! JSTOR Forum and Artstor.

pub mod cli;
pub mod error;
pub mod handlers;
pub mod server;
pub mod state;

pub use state::AppState;

/// Version reported by `/version` and `--version`.
pub const VERSION: &str = env!("ARIES_VERSION");
