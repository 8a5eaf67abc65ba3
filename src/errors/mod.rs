//! Unified error handling: every failure leaves the API as a status code
//! plus a plain-text message.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sqlx::postgres::PgDatabaseError;

/// Message returned for every malformed request.
pub const BAD_REQUEST: &str = "Bad Request";

/// Application error type mapping to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed or out-of-whitelist request input.
    #[error("Bad Request")]
    BadRequest,

    #[error("{0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Store(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Check if this error represents rejected request input.
    pub fn is_bad_request(&self) -> bool {
        matches!(self, Self::BadRequest)
    }
}

impl From<PathRejection> for AppError {
    fn from(_: PathRejection) -> Self {
        Self::BadRequest
    }
}

impl From<QueryRejection> for AppError {
    fn from(_: QueryRejection) -> Self {
        Self::BadRequest
    }
}

impl From<JsonRejection> for AppError {
    fn from(_: JsonRejection) -> Self {
        Self::BadRequest
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(_: validator::ValidationErrors) -> Self {
        Self::BadRequest
    }
}

/// Postgres SQLSTATE codes the API maps to client errors.
mod sqlstate {
    pub const FOREIGN_KEY_VIOLATION: &str = "23503";
    pub const UNIQUE_VIOLATION: &str = "23505";
    pub const NOT_NULL_VIOLATION: &str = "23502";
    pub const INVALID_TEXT_REPRESENTATION: &str = "22P02";
    pub const NUMERIC_VALUE_OUT_OF_RANGE: &str = "22003";
}

/// Classify a store failure by its SQLSTATE code and detail text.
///
/// Returns `None` for failures that are not the client's fault.
pub fn classify_store_failure(
    code: Option<&str>,
    detail: Option<&str>,
) -> Option<(StatusCode, String)> {
    match code? {
        sqlstate::FOREIGN_KEY_VIOLATION => {
            let detail = detail.unwrap_or(BAD_REQUEST).to_string();
            // The referenced article comes from the path, the other keys from the body.
            let status = if detail.contains("table \"articles\"") {
                StatusCode::NOT_FOUND
            } else {
                StatusCode::BAD_REQUEST
            };
            Some((status, detail))
        }
        sqlstate::UNIQUE_VIOLATION => Some((
            StatusCode::BAD_REQUEST,
            detail.unwrap_or(BAD_REQUEST).to_string(),
        )),
        sqlstate::NOT_NULL_VIOLATION
        | sqlstate::INVALID_TEXT_REPRESENTATION
        | sqlstate::NUMERIC_VALUE_OUT_OF_RANGE => {
            Some((StatusCode::BAD_REQUEST, BAD_REQUEST.to_string()))
        }
        _ => None,
    }
}

fn store_failure_response(e: &sqlx::Error) -> (StatusCode, String) {
    let classified = match e {
        sqlx::Error::Database(db_err) => {
            let detail = db_err
                .try_downcast_ref::<PgDatabaseError>()
                .and_then(|pg| pg.detail());
            classify_store_failure(db_err.code().as_deref(), detail)
        }
        _ => None,
    };

    classified.unwrap_or_else(|| {
        tracing::error!(error = %e, "Database error");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error".to_string(),
        )
    })
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadRequest => (StatusCode::BAD_REQUEST, BAD_REQUEST.to_string()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Store(e) => store_failure_response(e),
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        (status, message).into_response()
    }
}
