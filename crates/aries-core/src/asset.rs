//! Records extracted from catalog and public responses.

/// The attributes of a single catalog search hit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogAsset {
    /// Internal numeric asset ID (SSID).
    pub id: u64,
    pub filename: String,
    /// Passed back as the cache-buster on the representation lookup.
    pub representation_id: String,
}

/// Enrichment detail for a catalog asset. Both URLs are optional.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogRepresentation {
    pub download_url: Option<String>,
    pub presentation_url: Option<String>,
}

/// A published asset as known to the public service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicRecord {
    pub public_id: String,
}

/// What a single catalog search yielded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchMatch {
    /// No hits.
    None,
    /// Exactly one hit.
    Single(CatalogAsset),
    /// More than one hit; unusable.
    Ambiguous { total: u64 },
}

