//! Shared fixtures for the mock upstream tests.

#![allow(dead_code)]

use std::time::Duration;

use aries_core::{BaseUrl, Credentials, SearchFilter};
use aries_upstream::{Resolver, UpstreamConfig};
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const PROJECT: &str = "1041";
pub const EMAIL: &str = "cataloger@example.edu";
pub const PASSWORD: &str = "secret123";

/// A pair of mock upstreams and a resolver wired to them.
pub struct Harness {
    pub catalog: MockServer,
    pub public: MockServer,
    pub resolver: Resolver,
}

impl Harness {
    pub async fn start() -> Self {
        Self::start_with_timeout(Duration::from_secs(10)).await
    }

    pub async fn start_with_timeout(timeout: Duration) -> Self {
        let catalog = MockServer::start().await;
        let public = MockServer::start().await;
        let config = UpstreamConfig::new(
            BaseUrl::new(catalog.uri()).unwrap(),
            BaseUrl::new(public.uri()).unwrap(),
            PROJECT,
            Credentials::new(EMAIL, PASSWORD),
        )
        .with_timeout(timeout);
        let resolver = Resolver::from_config(&config).unwrap();

        Self {
            catalog,
            public,
            resolver,
        }
    }
}

/// Path of the project asset search.
pub fn assets_path() -> String {
    format!("/projects/{PROJECT}/assets")
}

/// Decoded `filter` query value for a single filter.
pub fn filter_query(filter: &SearchFilter) -> String {
    format!("[{}]", filter.to_json())
}

/// Matcher chain for a search using `filter`.
pub fn search_for(filter: &SearchFilter) -> wiremock::MockBuilder {
    Mock::given(method("GET"))
        .and(path(assets_path()))
        .and(query_param("filter", filter_query(filter)))
}

/// A search response holding the given assets.
pub fn hits(total: u64, assets: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "total": total,
        "assets": assets
    }))
}

/// Single-hit response for the reference asset.
pub fn reference_hit() -> ResponseTemplate {
    hits(
        1,
        json!([{
            "id": 23760225,
            "filename": "20150110ARCH_0004.tif",
            "representation_id": "r1"
        }]),
    )
}

/// Login response setting one session cookie.
pub fn login_response(cookie: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).insert_header("set-cookie", format!("JSESSIONID={cookie}; Path=/"))
}
