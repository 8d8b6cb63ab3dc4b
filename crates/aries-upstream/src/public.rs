//! Artstor public discovery API.

use std::sync::Arc;

use tracing::{debug, instrument};

use aries_core::{BaseUrl, Error, PublicRecord, Result, Upstream};

use crate::client::{UpstreamClient, UpstreamRequest};
use crate::endpoints::{PUBLIC_SEARCH, PublicSearchRequest, PublicSearchResponse};

/// Content types searched when cross-resolving a catalog asset.
const CONTENT_TYPES: &[&str] = &["art"];

/// Client for the public search endpoint.
#[derive(Debug, Clone)]
pub struct PublicApi {
    client: Arc<UpstreamClient>,
    base: BaseUrl,
}

impl PublicApi {
    pub fn new(client: Arc<UpstreamClient>, base: BaseUrl) -> Self {
        Self { client, base }
    }

    /// Find the public record for a catalog asset ID.
    ///
    /// Returns `None` unless exactly one record matches.
    #[instrument(skip(self))]
    pub async fn find_by_catalog_id(&self, catalog_id: u64) -> Result<Option<PublicRecord>> {
        let request = PublicSearchRequest {
            limit: 1,
            start: 0,
            content_types: CONTENT_TYPES,
            query: format!("ssid:{catalog_id}"),
        };
        let body = serde_json::to_value(&request).map_err(|e| Error::Decode {
            system: Upstream::Public,
            message: e.to_string(),
        })?;

        let raw = self
            .client
            .call(
                Upstream::Public,
                &UpstreamRequest::post_json(self.base.endpoint(PUBLIC_SEARCH), body),
            )
            .await?;

        let response: PublicSearchResponse =
            serde_json::from_str(&raw).map_err(|e| Error::Decode {
                system: Upstream::Public,
                message: e.to_string(),
            })?;

        if response.total != 1 {
            debug!(total = response.total, "No unique public match");
            return Ok(None);
        }

        Ok(response
            .results
            .into_iter()
            .next()
            .filter(|r| !r.artstorid.is_empty())
            .map(|r| PublicRecord {
                public_id: r.artstorid,
            }))
    }

    /// The public-facing view URL for a record.
    pub fn access_url(&self, record: &PublicRecord) -> String {
        format!("{}/#/asset/{}", self.base.as_str(), record.public_id)
    }
}
