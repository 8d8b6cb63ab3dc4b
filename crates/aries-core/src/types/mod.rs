//! Core gateway types.
//!
//! These types enforce their invariants at construction time.

mod base_url;
mod upstream;

pub use base_url::BaseUrl;
pub use upstream::Upstream;
