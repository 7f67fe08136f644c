//! Uniform JSON body returned for every error the API produces.

use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Envelope sent to clients whenever a request fails.
///
/// All status-derived fields come from a single `StatusCode`, so they
/// can never disagree with each other. The message is uppercased for
/// display in the frontend banner.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Moment the response was built, RFC 3339 UTC.
    pub timestamp: DateTime<Utc>,
    /// Numeric HTTP status, e.g. 404.
    pub status_code: u16,
    /// Screaming-snake status name, e.g. `NOT_FOUND`.
    pub status: String,
    /// Uppercase reason phrase, e.g. `NOT FOUND`.
    pub reason: String,
    /// Uppercase client-facing message.
    pub message: String,
}

impl ErrorResponse {
    /// Builds the envelope for `status`, uppercasing `message`.
    ///
    /// An empty or whitespace-only message falls back to the reason
    /// phrase so the body never ships a blank message.
    pub fn new(status: StatusCode, message: &str) -> Self {
        let reason = status.canonical_reason().unwrap_or("Unknown");
        let message = if message.trim().is_empty() {
            reason.to_uppercase()
        } else {
            message.to_uppercase()
        };
        Self {
            timestamp: Utc::now(),
            status_code: status.as_u16(),
            status: reason.to_uppercase().replace(' ', "_"),
            reason: reason.to_uppercase(),
            message,
        }
    }
}
