//! Health check endpoint.

use axum::{Json, Router, extract::State, routing::get};
use serde_json::{Value, json};

use crate::routes::AppState;

/// Health check endpoint for monitoring.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy")
    )
)]
pub async fn health_check(State(_state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Creates the health routes.
pub fn health_router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
