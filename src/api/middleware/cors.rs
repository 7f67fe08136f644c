//! CORS middleware configuration.

use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::warn;

/// Create the CORS layer from environment configuration.
///
/// `CORS_ALLOWED_ORIGINS` holds a comma-separated list of origins.
/// When it is unset or empty the layer is permissive, which suits
/// development. Origins that fail to parse are skipped with a warning.
pub fn create_cors_layer() -> CorsLayer {
    let configured = std::env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default();
    if configured.trim().is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = configured
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    CorsLayer::new().allow_origin(AllowOrigin::list(origins))
}
