//! Banner and health check endpoints

use axum::{routing::get, Json, Router};
use serde::Serialize;

/// Plain-text welcome served at the root
pub const BANNER: &str = "Hello, CS 262 Monopoly service!";

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// GET /
async fn banner() -> &'static str {
    BANNER
}

/// GET /health
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Banner and health routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(banner))
        .route("/health", get(health))
}
