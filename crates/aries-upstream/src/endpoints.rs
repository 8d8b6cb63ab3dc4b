//! Upstream endpoint paths and request/response wire types.

use serde::{Deserialize, Serialize};

// ============================================================================
// Catalog (JSTOR Forum)
// ============================================================================

/// Form-login endpoint.
pub const CATALOG_LOGIN: &str = "account";

/// Representation detail endpoint for an asset.
pub fn catalog_representation(asset_id: u64) -> String {
    format!("assets/{asset_id}/representation/details")
}

/// Asset search endpoint for a project.
pub fn catalog_assets(project: &str) -> String {
    format!("projects/{project}/assets")
}

/// Response from an asset search.
#[derive(Debug, Deserialize)]
pub struct AssetSearchResponse {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub assets: Vec<AssetEntry>,
}

/// A single asset entry from a search.
#[derive(Debug, Deserialize)]
pub struct AssetEntry {
    pub id: u64,
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub representation_id: String,
}

/// Response from the representation detail endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct RepresentationResponse {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub iiif_url: Option<String>,
}

// ============================================================================
// Public (Artstor)
// ============================================================================

/// Session bootstrap endpoint.
pub const PUBLIC_SESSION: &str = "api/secure/userinfo";

/// Search endpoint.
pub const PUBLIC_SEARCH: &str = "api/search/v1.0/search";

/// Request body for a public search.
#[derive(Debug, Serialize)]
pub struct PublicSearchRequest<'a> {
    pub limit: u32,
    pub start: u32,
    pub content_types: &'a [&'a str],
    pub query: String,
}

/// Response from a public search.
#[derive(Debug, Deserialize)]
pub struct PublicSearchResponse {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub results: Vec<PublicResult>,
}

/// A single public search result.
#[derive(Debug, Deserialize)]
pub struct PublicResult {
    #[serde(default)]
    pub artstorid: String,
}
