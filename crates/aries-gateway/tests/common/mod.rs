//! Router fixtures backed by mock upstreams.

#![allow(dead_code)]

use aries_core::{BaseUrl, Credentials};
use aries_gateway::AppState;
use aries_gateway::server::build_router;
use aries_upstream::{Resolver, UpstreamConfig};
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;
use wiremock::{MockServer, ResponseTemplate};

pub const PROJECT: &str = "1041";

/// A router wired to a pair of mock upstreams.
pub struct Gateway {
    pub catalog: MockServer,
    pub public: MockServer,
    pub router: Router,
}

impl Gateway {
    pub async fn start() -> Self {
        let catalog = MockServer::start().await;
        let public = MockServer::start().await;
        let config = UpstreamConfig::new(
            BaseUrl::new(catalog.uri()).unwrap(),
            BaseUrl::new(public.uri()).unwrap(),
            PROJECT,
            Credentials::new("cataloger@example.edu", "secret123"),
        );
        let resolver = Resolver::from_config(&config).unwrap();

        Self {
            catalog,
            public,
            router: build_router(AppState::new(resolver)),
        }
    }

    /// Issue a GET and return status plus body text.
    pub async fn get(&self, uri: &str) -> (StatusCode, String) {
        let response = self
            .router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    pub async fn get_json(&self, uri: &str) -> (StatusCode, Value) {
        let (status, body) = self.get(uri).await;
        (status, serde_json::from_str(&body).unwrap())
    }
}

pub fn assets_path() -> String {
    format!("/projects/{PROJECT}/assets")
}

pub fn hits(total: u64, assets: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "total": total,
        "assets": assets
    }))
}
