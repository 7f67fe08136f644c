// API module for Rust backend
pub mod api;

// Re-export api modules at crate root for library tests (so routes can use crate::models)
pub use api::messages;
pub use api::middleware;
pub use api::models;
pub use api::routes;
