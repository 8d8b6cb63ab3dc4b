//! Identifier resolution.
//!
//! An external identifier is looked up in the catalog first as an internal
//! ID, then as a filename prefix. The first filter that yields exactly one
//! asset wins; later filters are never queried. The match is enriched with
//! representation URLs and, if the asset is published, its public view URL.
//! Enrichment failures only shorten the descriptor.
//!
//! Every failure on the search path is reported as not found, including
//! transport errors on every filter.

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use aries_core::traits::SessionStore;
use aries_core::{
    AriesDescriptor, CatalogAsset, Error, Protocol, Result, SearchFilter, SearchMatch, Upstream,
};

use crate::auth::HttpAuthenticator;
use crate::catalog::CatalogApi;
use crate::client::UpstreamClient;
use crate::config::UpstreamConfig;
use crate::http::build_client;
use crate::public::PublicApi;
use crate::store::MemorySessionStore;

/// Resolves external identifiers into [`AriesDescriptor`]s.
#[derive(Debug, Clone)]
pub struct Resolver {
    catalog: CatalogApi,
    public: PublicApi,
}

impl Resolver {
    pub fn new(catalog: CatalogApi, public: PublicApi) -> Self {
        Self { catalog, public }
    }

    /// Wire a resolver to live upstreams with an in-memory session store.
    ///
    /// No login happens here; call [`Resolver::login_all`] before serving.
    pub fn from_config(config: &UpstreamConfig) -> Result<Self> {
        let http = build_client(config.timeout)?;
        let store: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());
        let authenticator = Arc::new(HttpAuthenticator::new(
            http.clone(),
            config.timeout,
            config.catalog_url.clone(),
            config.public_url.clone(),
            config.credentials.clone(),
            Arc::clone(&store),
        ));
        let client = Arc::new(UpstreamClient::new(
            http,
            config.timeout,
            store,
            authenticator,
        ));

        Ok(Self::new(
            CatalogApi::new(
                Arc::clone(&client),
                config.catalog_url.clone(),
                config.project.clone(),
            ),
            PublicApi::new(client, config.public_url.clone()),
        ))
    }

    pub fn catalog(&self) -> &CatalogApi {
        &self.catalog
    }

    pub fn public(&self) -> &PublicApi {
        &self.public
    }

    /// Establish sessions with every upstream, catalog first.
    pub async fn login_all(&self) -> Result<()> {
        let authenticator = self.catalog.client().authenticator();
        for system in Upstream::ALL {
            authenticator.login(system).await?;
        }
        Ok(())
    }

    /// Whether the catalog answers a zero-limit query.
    pub async fn catalog_reachable(&self) -> bool {
        match self.catalog.ping().await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "Catalog ping failed");
                false
            }
        }
    }

    /// Resolve `external_id` into a descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] when no filter yields exactly one asset.
    #[instrument(skip(self))]
    pub async fn resolve(&self, external_id: &str) -> Result<AriesDescriptor> {
        let filters = [
            SearchFilter::id_equals(external_id),
            SearchFilter::filename_prefix(external_id),
        ];

        for filter in &filters {
            if let Some((asset, published)) = self.find(filter).await {
                info!(id = asset.id, field = ?filter.field(), "Matched catalog asset");
                return Ok(self.describe(asset, published).await);
            }
        }

        info!("No unambiguous match");
        Err(Error::NotFound {
            identifier: external_id.to_string(),
        })
    }

    /// Run one filter; `None` covers errors, zero hits and ambiguous hits.
    async fn find(&self, filter: &SearchFilter) -> Option<(CatalogAsset, bool)> {
        let search = match self.catalog.search(filter).await {
            Ok(search) => search,
            Err(e) => {
                warn!(filter = %filter.to_json(), error = %e, "Query filter failed");
                return None;
            }
        };

        let published = search.published;
        match search.outcome() {
            SearchMatch::Single(asset) => Some((asset, published)),
            SearchMatch::None => {
                debug!(filter = %filter.to_json(), "No hits");
                None
            }
            SearchMatch::Ambiguous { total } => {
                warn!(filter = %filter.to_json(), total, "Query filter returned more than one hit");
                None
            }
        }
    }

    async fn describe(&self, asset: CatalogAsset, published: bool) -> AriesDescriptor {
        let mut builder = AriesDescriptor::builder();
        builder
            .identifier(asset.id.to_string())
            .identifier(asset.filename.clone());

        match self.catalog.representation(&asset).await {
            Ok(representation) => {
                if let Some(url) = representation.download_url {
                    builder.service_url(url, Protocol::ImageDownload);
                }
                if let Some(url) = representation.presentation_url {
                    builder.service_url(url, Protocol::IiifPresentation);
                }
            }
            Err(e) => warn!(id = asset.id, error = %e, "Representation lookup failed"),
        }

        if published {
            debug!(id = asset.id, "Asset is published, looking up public ID");
            match self.public.find_by_catalog_id(asset.id).await {
                Ok(Some(record)) => {
                    info!(id = asset.id, public_id = %record.public_id, "Resolved public ID");
                    builder.access_url(self.public.access_url(&record));
                }
                Ok(None) => debug!(id = asset.id, "No public record"),
                Err(e) => warn!(id = asset.id, error = %e, "Public lookup failed"),
            }
        }

        builder.build()
    }
}
