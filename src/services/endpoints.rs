//! Machine-readable description of the API surface.

use crate::errors::AppError;

const ENDPOINTS_JSON: &str = include_str!("../../endpoints.json");

/// Every endpoint keyed by `"METHOD /path"`.
pub fn describe() -> Result<serde_json::Value, AppError> {
    serde_json::from_str(ENDPOINTS_JSON)
        .map_err(|e| AppError::Internal(format!("Invalid endpoints descriptor: {e}")))
}
