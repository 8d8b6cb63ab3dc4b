//! HTTP surface tests.

mod common;

use aries_core::SearchFilter;
use axum::http::StatusCode;
use common::*;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_lookup_returns_descriptor() {
    let gw = Gateway::start().await;

    Mock::given(method("GET"))
        .and(path(assets_path()))
        .and(query_param(
            "filter",
            format!("[{}]", SearchFilter::id_equals("23760225").to_json()),
        ))
        .respond_with(hits(
            1,
            json!([{
                "id": 23760225,
                "filename": "20150110ARCH_0004.tif",
                "representation_id": "r1"
            }]),
        ))
        .mount(&gw.catalog)
        .await;
    Mock::given(method("GET"))
        .and(path("/assets/23760225/representation/details"))
        .and(query_param("_dc", "r1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "url": "https://forum.example/dl/1",
            "iiif_url": "https://iiif.example/1/manifest"
        })))
        .mount(&gw.catalog)
        .await;

    let (status, body) = gw.get_json("/api/aries/23760225").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "identifier": ["23760225", "20150110ARCH_0004.tif"],
            "service_url": [
                {"url": "https://forum.example/dl/1", "protocol": "image-download"},
                {"url": "https://iiif.example/1/manifest", "protocol": "iiif-presentation"}
            ]
        })
    );
}

#[tokio::test]
async fn test_unknown_id_is_404_naming_the_id() {
    let gw = Gateway::start().await;

    Mock::given(method("GET"))
        .and(path(assets_path()))
        .respond_with(hits(0, json!([])))
        .expect(2)
        .mount(&gw.catalog)
        .await;

    let (status, body) = gw.get("/api/aries/nope-42").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("nope-42"));
}

#[tokio::test]
async fn test_healthcheck_reports_reachable_catalog() {
    let gw = Gateway::start().await;

    Mock::given(method("GET"))
        .and(path(assets_path()))
        .and(query_param("limit", "0"))
        .respond_with(hits(0, json!([])))
        .expect(1)
        .mount(&gw.catalog)
        .await;

    let (status, body) = gw.get_json("/healthcheck").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"AriesJSTOR": "true", "JSTOR": "true"}));
}

#[tokio::test]
async fn test_healthcheck_reports_unreachable_catalog() {
    let gw = Gateway::start().await;

    Mock::given(method("GET"))
        .and(path(assets_path()))
        .respond_with(ResponseTemplate::new(503))
        .mount(&gw.catalog)
        .await;

    let (status, body) = gw.get_json("/healthcheck").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"AriesJSTOR": "true", "JSTOR": "false"}));
}

#[tokio::test]
async fn test_version_text() {
    let gw = Gateway::start().await;

    let (status, body) = gw.get("/version").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, format!("Aries JSTOR version {}", aries_gateway::VERSION));
}

#[tokio::test]
async fn test_ping_and_favicon() {
    let gw = Gateway::start().await;

    let (status, body) = gw.get("/api/aries").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "JSTOR Aries API");

    let (status, body) = gw.get("/favicon.ico").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
}
