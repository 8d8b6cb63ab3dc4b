//! aries-core - Core types and traits for the Aries JSTOR gateway.

pub mod asset;
pub mod credentials;
pub mod descriptor;
pub mod error;
pub mod filter;
pub mod session;
pub mod traits;
pub mod types;

pub use asset::{CatalogAsset, CatalogRepresentation, PublicRecord, SearchMatch};
pub use credentials::Credentials;
pub use descriptor::{AriesDescriptor, DescriptorBuilder, Protocol, ServiceUrl};
pub use error::Error;
pub use filter::SearchFilter;
pub use session::{Session, SessionCookie};
pub use traits::{Authenticator, SessionStore};
pub use types::{BaseUrl, Upstream};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
