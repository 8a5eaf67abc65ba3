//! Endpoint discovery.

use axum::Json;
use serde::Serialize;

use crate::errors::AppError;
use crate::services::endpoints;

#[derive(Debug, Serialize)]
pub struct EndpointsBody {
    pub endpoints: serde_json::Value,
}

/// GET /api -- describe every endpoint.
pub async fn describe() -> Result<Json<EndpointsBody>, AppError> {
    Ok(Json(EndpointsBody {
        endpoints: endpoints::describe()?,
    }))
}
