//! aries-upstream - Cookie-session clients for the catalog and public APIs,
//! and the identifier resolver built on them.

mod auth;
mod catalog;
mod client;
mod config;
mod endpoints;
mod http;
mod public;
mod resolver;
mod store;

pub use auth::HttpAuthenticator;
pub use catalog::{CatalogApi, CatalogSearch, is_published};
pub use client::{UpstreamClient, UpstreamRequest};
pub use config::UpstreamConfig;
pub use http::REQUEST_TIMEOUT;
pub use public::PublicApi;
pub use resolver::Resolver;
pub use store::MemorySessionStore;
