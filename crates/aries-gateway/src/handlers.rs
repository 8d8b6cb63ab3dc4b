//! Request handlers.

use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;
use tracing::{info, instrument};

use aries_core::AriesDescriptor;

use crate::error::ApiError;
use crate::state::AppState;

/// Body of `/healthcheck`. Values are the strings `"true"` or `"false"`.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    #[serde(rename = "AriesJSTOR")]
    pub service: String,
    #[serde(rename = "JSTOR")]
    pub catalog: String,
}

/// Browsers ask for this; answer with an empty body.
pub async fn favicon() {}

pub async fn version() -> String {
    format!("Aries JSTOR version {}", crate::VERSION)
}

pub async fn ping() -> &'static str {
    "JSTOR Aries API"
}

/// Report service liveness and catalog reachability.
pub async fn healthcheck(State(state): State<AppState>) -> Json<HealthStatus> {
    let reachable = state.resolver.catalog_reachable().await;
    Json(HealthStatus {
        service: true.to_string(),
        catalog: reachable.to_string(),
    })
}

/// Resolve an external identifier into an Aries descriptor.
#[instrument(skip(state))]
pub async fn lookup(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AriesDescriptor>, ApiError> {
    info!("Aries lookup");
    let descriptor = state.resolver.resolve(&id).await?;
    Ok(Json(descriptor))
}
