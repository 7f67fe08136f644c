// Middleware module - contains CORS, observability, and response shaping

pub mod cors;
pub mod method_not_allowed;
pub mod observability;

// Re-export for convenience
#[allow(unused_imports)]
pub use cors::create_cors_layer;
