//! API routes module - organizes all route handlers.

pub mod app_state;
pub mod error;
pub mod health;
pub mod openapi;

use axum::Router;

pub use app_state::AppState;

use crate::middleware::method_not_allowed::apply_method_guard;

/// Create the main API router combining all route modules.
///
/// Unmatched URLs fall back to the catch-all error handler.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .merge(health::health_router())
        .merge(error::error_router())
        .merge(openapi::openapi_router())
        .fallback(error::no_mapping)
    // Note: State is applied by callers who need it (e.g., TestServer)
    // For production use, call .with_state(app_state) after creating the router
}

/// Create the full application: routes, state, and the method guard
/// wrapped around the finished router so bare 405 rejections are
/// rewritten into the uniform error body.
pub fn create_app(app_state: AppState) -> Router {
    let api = create_api_router().with_state(app_state.clone());
    apply_method_guard(api, app_state)
}

/// Create the application state.
pub fn create_app_state() -> AppState {
    AppState::new()
}
