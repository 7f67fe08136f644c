//! Central error boundary for the API.
//!
//! Every failure a handler can produce is classified into one
//! [`ApiError`] kind, and every kind maps to exactly one HTTP status
//! and one client-facing message. Handlers return `Result<_, ApiError>`
//! and the boundary turns the error into the uniform
//! [`ErrorResponse`] JSON body. Server faults are logged here with
//! their raw detail before the sanitized body is built.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::any,
};
use thiserror::Error;
use tracing::error;

use crate::messages::{FRENCH, MessageCatalog};
use crate::models::ErrorResponse;
use crate::routes::AppState;

/// Route that unmatched URLs resolve to.
pub const ERROR_PATH: &str = "/error";

const TOKEN_EXPIRED_MSG: &str = "Token has expired";

/// Everything the API can answer a failed request with.
///
/// Variants carrying a `String` echo that text to the client; the
/// others use a fixed catalog message. `Io` and `Unexpected` never
/// leak their payload, only the sanitized catalog message.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("account disabled")]
    AccountDisabled,
    #[error("bad credentials")]
    BadCredentials,
    #[error("access denied")]
    AccessDenied,
    #[error("account locked")]
    AccountLocked,
    #[error("token expired: {0}")]
    TokenExpired(String),
    #[error("email already exists: {0}")]
    EmailExists(String),
    #[error("username already exists: {0}")]
    UsernameExists(String),
    #[error("email not found: {0}")]
    EmailNotFound(String),
    #[error("user not found: {0}")]
    UserNotFound(String),
    #[error("not an image file: {0}")]
    NotAnImageFile(String),
    #[error("password rule violated: {0}")]
    PasswordPolicy(String),
    #[error("promotion rejected: {0}")]
    Promotion(String),
    #[error("forum rejected: {0}")]
    Forum(String),
    #[error("method not allowed, supported: {supported}")]
    MethodNotAllowed { supported: String },
    #[error("no result: {0}")]
    NoResult(String),
    #[error("file processing failed")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
    #[error("no handler for url")]
    NoHandlerFound,
}

impl ApiError {
    /// HTTP status for this kind.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::AccountDisabled
            | ApiError::BadCredentials
            | ApiError::EmailExists(_)
            | ApiError::UsernameExists(_)
            | ApiError::EmailNotFound(_)
            | ApiError::UserNotFound(_)
            | ApiError::NotAnImageFile(_)
            | ApiError::PasswordPolicy(_)
            | ApiError::Promotion(_)
            | ApiError::Forum(_) => StatusCode::BAD_REQUEST,
            ApiError::AccountLocked | ApiError::TokenExpired(_) => StatusCode::UNAUTHORIZED,
            ApiError::AccessDenied => StatusCode::FORBIDDEN,
            ApiError::NoResult(_) | ApiError::NoHandlerFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Io(_) | ApiError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message for this kind, before uppercasing.
    pub fn client_message(&self, catalog: &MessageCatalog) -> String {
        match self {
            ApiError::AccountDisabled => catalog.account_disabled.to_string(),
            ApiError::BadCredentials => catalog.incorrect_credentials.to_string(),
            ApiError::AccessDenied => catalog.not_enough_permission.to_string(),
            ApiError::AccountLocked => catalog.account_locked.to_string(),
            ApiError::TokenExpired(msg)
            | ApiError::EmailExists(msg)
            | ApiError::UsernameExists(msg)
            | ApiError::EmailNotFound(msg)
            | ApiError::UserNotFound(msg)
            | ApiError::NotAnImageFile(msg)
            | ApiError::PasswordPolicy(msg)
            | ApiError::Promotion(msg)
            | ApiError::Forum(msg)
            | ApiError::NoResult(msg) => msg.clone(),
            ApiError::MethodNotAllowed { supported } => {
                catalog.method_not_allowed.replace("%s", supported)
            }
            ApiError::Io(_) => catalog.error_processing_file.to_string(),
            ApiError::Unexpected(_) => catalog.internal_server_error.to_string(),
            ApiError::NoHandlerFound => catalog.no_mapping.to_string(),
        }
    }

    /// Logs the kinds the platform wants traces for.
    ///
    /// Server faults log their raw detail, which never reaches the
    /// client. Upload and lookup rejections are logged for support.
    pub fn log(&self) {
        match self {
            ApiError::NotAnImageFile(msg) => error!("rejected upload: {}", msg),
            ApiError::NoResult(msg) => error!("no result for query: {}", msg),
            ApiError::Io(source) => error!("file processing failed: {}", source),
            ApiError::Unexpected(source) => error!("unhandled error: {:#}", source),
            _ => {}
        }
    }

    /// Logs the error and builds the status and JSON body for it.
    pub fn to_response(&self, catalog: &MessageCatalog) -> (StatusCode, ErrorResponse) {
        self.log();
        let status = self.status_code();
        let body = ErrorResponse::new(status, &self.client_message(catalog));
        (status, body)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = self.to_response(&FRENCH);
        (status, Json(body)).into_response()
    }
}

impl From<jsonwebtoken::errors::Error> for ApiError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        if matches!(
            err.kind(),
            jsonwebtoken::errors::ErrorKind::ExpiredSignature
        ) {
            ApiError::TokenExpired(TOKEN_EXPIRED_MSG.to_string())
        } else {
            ApiError::Unexpected(anyhow::Error::new(err))
        }
    }
}

/// Catch-all handler for URLs with no route.
#[utoipa::path(
    get,
    path = "/error",
    tag = "Errors",
    responses(
        (status = 404, description = "No route matches the requested URL", body = ErrorResponse)
    )
)]
pub async fn no_mapping(State(state): State<AppState>) -> impl IntoResponse {
    let (status, body) = ApiError::NoHandlerFound.to_response(state.catalog);
    (status, Json(body))
}

/// Creates the error routes.
pub fn error_router() -> axum::Router<AppState> {
    axum::Router::new().route(ERROR_PATH, any(no_mapping))
}
