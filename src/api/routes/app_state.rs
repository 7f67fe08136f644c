//! Application state management.
//!
//! Defines the AppState struct shared by all route handlers. The error
//! boundary is stateless, so the state only carries configuration.

use crate::messages::{self, MessageCatalog};

/// Application state shared across all route handlers.
#[derive(Clone)]
pub struct AppState {
    /// Message catalog used when building error responses.
    pub catalog: &'static MessageCatalog,
}

impl AppState {
    /// Create a new application state with the production catalog.
    pub fn new() -> Self {
        Self {
            catalog: &messages::FRENCH,
        }
    }

    /// Create an application state with a specific catalog.
    pub fn with_catalog(catalog: &'static MessageCatalog) -> Self {
        Self { catalog }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
