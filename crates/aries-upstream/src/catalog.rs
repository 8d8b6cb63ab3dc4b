//! JSTOR Forum catalog API.

use std::sync::Arc;

use tracing::{debug, instrument};

use aries_core::filter::filter_param;
use aries_core::{
    BaseUrl, CatalogAsset, CatalogRepresentation, Error, Result, SearchFilter, SearchMatch,
    Upstream,
};

use crate::client::{UpstreamClient, UpstreamRequest};
use crate::endpoints::{
    AssetSearchResponse, RepresentationResponse, catalog_assets, catalog_representation,
};

/// Query string shared by every single-hit search.
const SEARCH_PARAMS: &str = "with_meta=false&start=0&limit=1&sort=id&dir=DESC";

/// Query string for the zero-limit reachability probe.
const PROBE_PARAMS: &str = "with_meta=false&start=0&limit=0";

/// Result of one catalog search.
#[derive(Debug, Clone)]
pub struct CatalogSearch {
    pub total: u64,
    pub assets: Vec<CatalogAsset>,
    /// Whether the raw response carried the publication marker.
    pub published: bool,
}

impl CatalogSearch {
    /// Classify the search. A reported single hit with no asset entry
    /// counts as no match.
    pub fn outcome(self) -> SearchMatch {
        match self.total {
            0 => SearchMatch::None,
            1 => self
                .assets
                .into_iter()
                .next()
                .map_or(SearchMatch::None, SearchMatch::Single),
            total => SearchMatch::Ambiguous { total },
        }
    }
}

/// Client for the catalog's asset search and representation endpoints.
#[derive(Debug, Clone)]
pub struct CatalogApi {
    client: Arc<UpstreamClient>,
    base: BaseUrl,
    project: String,
}

impl CatalogApi {
    pub fn new(client: Arc<UpstreamClient>, base: BaseUrl, project: impl Into<String>) -> Self {
        Self {
            client,
            base,
            project: project.into(),
        }
    }

    pub fn client(&self) -> &Arc<UpstreamClient> {
        &self.client
    }

    /// Returns the search URL for a single filter.
    pub fn search_url(&self, filter: &SearchFilter) -> String {
        format!(
            "{}?{}&filter={}",
            self.base.endpoint(&catalog_assets(&self.project)),
            SEARCH_PARAMS,
            filter_param(std::slice::from_ref(filter))
        )
    }

    /// Run a single-hit search for `filter`.
    #[instrument(skip(self, filter), fields(filter = %filter.to_json()))]
    pub async fn search(&self, filter: &SearchFilter) -> Result<CatalogSearch> {
        let raw = self
            .client
            .call(Upstream::Catalog, &UpstreamRequest::get(self.search_url(filter)))
            .await?;

        let response: AssetSearchResponse =
            serde_json::from_str(&raw).map_err(|e| Error::Decode {
                system: Upstream::Catalog,
                message: e.to_string(),
            })?;
        debug!(total = response.total, "Catalog search complete");

        Ok(CatalogSearch {
            total: response.total,
            assets: response
                .assets
                .into_iter()
                .map(|a| CatalogAsset {
                    id: a.id,
                    filename: a.filename,
                    representation_id: a.representation_id,
                })
                .collect(),
            published: is_published(&raw),
        })
    }

    /// Fetch download and presentation URLs for `asset`.
    #[instrument(skip(self, asset), fields(id = asset.id))]
    pub async fn representation(&self, asset: &CatalogAsset) -> Result<CatalogRepresentation> {
        let url = format!(
            "{}?_dc={}",
            self.base.endpoint(&catalog_representation(asset.id)),
            asset.representation_id
        );
        let raw = self
            .client
            .call(Upstream::Catalog, &UpstreamRequest::get(url))
            .await?;

        let response: RepresentationResponse =
            serde_json::from_str(&raw).map_err(|e| Error::Decode {
                system: Upstream::Catalog,
                message: e.to_string(),
            })?;

        Ok(CatalogRepresentation {
            download_url: response.url.filter(|u| !u.is_empty()),
            presentation_url: response.iiif_url.filter(|u| !u.is_empty()),
        })
    }

    /// Zero-limit search used as a reachability probe. Reads nothing.
    #[instrument(skip(self))]
    pub async fn ping(&self) -> Result<()> {
        let url = format!(
            "{}?{}",
            self.base.endpoint(&catalog_assets(&self.project)),
            PROBE_PARAMS
        );
        self.client
            .call(Upstream::Catalog, &UpstreamRequest::get(url))
            .await?;
        Ok(())
    }
}

/// Looks for a `"status"` key whose value is `"Published"` in raw JSON text.
///
/// Whitespace around the colon is tolerated so pretty-printed and compact
/// responses both match.
pub fn is_published(raw: &str) -> bool {
    const KEY: &str = "\"status\"";
    raw.match_indices(KEY).any(|(at, _)| {
        raw[at + KEY.len()..]
            .trim_start()
            .strip_prefix(':')
            .is_some_and(|rest| rest.trim_start().starts_with("\"Published\""))
    })
}
