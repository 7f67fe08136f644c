//! Response shaping for rejected HTTP methods.
//!
//! The router answers a request whose method is not registered on a
//! matched path with a bare 405 and an `Allow` header. The guard here
//! rewrites that bare response into the uniform error body, naming the
//! first method the endpoint supports. The router appends the `Allow`
//! header after per-route middleware has run, so the guard must wrap
//! the finished router rather than sit in its middleware stack.

use axum::{
    Json, Router,
    extract::{Request, State},
    http::{StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tower::Layer;

use crate::routes::AppState;
use crate::routes::error::ApiError;

/// Replaces bare 405 responses with the uniform error body.
pub async fn method_not_allowed_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;

    // Handlers that produced their own 405 body already set a content
    // type; only the router's bare rejection is rewritten.
    if response.status() != StatusCode::METHOD_NOT_ALLOWED
        || response.headers().contains_key(header::CONTENT_TYPE)
    {
        return response;
    }

    let Some(allow) = response.headers().get(header::ALLOW).cloned() else {
        return response;
    };
    let Some(supported) = allow
        .to_str()
        .ok()
        .and_then(|methods| methods.split(',').map(str::trim).find(|m| !m.is_empty()))
    else {
        return response;
    };

    let (status, body) = ApiError::MethodNotAllowed {
        supported: supported.to_string(),
    }
    .to_response(state.catalog);

    let mut shaped = (status, Json(body)).into_response();
    shaped.headers_mut().insert(header::ALLOW, allow);
    shaped
}

/// Wraps a finished router with the method guard.
///
/// The guard has to see the router's final response, `Allow` header
/// included, which a layer inside the router never does.
pub fn apply_method_guard(app: Router, app_state: AppState) -> Router {
    let guarded = axum::middleware::from_fn_with_state(app_state, method_not_allowed_middleware)
        .layer(app);
    Router::new().fallback_service(guarded)
}
