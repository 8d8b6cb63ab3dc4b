//! Upstream system identifiers.

use std::fmt;

/// One of the two authenticated systems the gateway talks to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Upstream {
    /// The private administrative catalog (JSTOR Forum).
    Catalog,
    /// The public discovery service (Artstor).
    Public,
}

impl Upstream {
    /// All upstream systems, in startup login order.
    pub const ALL: [Upstream; 2] = [Upstream::Catalog, Upstream::Public];

    /// Returns the lowercase name used in logs and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Upstream::Catalog => "catalog",
            Upstream::Public => "public",
        }
    }
}

impl fmt::Display for Upstream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
