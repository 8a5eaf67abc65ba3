//! Topic routes.

use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::WithRejection;
use serde::Serialize;
use validator::Validate;

use crate::errors::AppError;
use crate::models::topic::{CreateTopic, Topic};
use crate::services::topic as topic_service;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct TopicsBody {
    pub topics: Vec<Topic>,
}

#[derive(Debug, Serialize)]
pub struct TopicBody {
    pub topic: Topic,
}

/// GET /api/topics
pub async fn list(State(state): State<AppState>) -> Result<Json<TopicsBody>, AppError> {
    let topics = topic_service::list(&state.db).await?;
    Ok(Json(TopicsBody { topics }))
}

/// POST /api/topics
pub async fn create(
    State(state): State<AppState>,
    WithRejection(Json(body), _): WithRejection<Json<CreateTopic>, AppError>,
) -> Result<(StatusCode, Json<TopicBody>), AppError> {
    body.validate()?;
    let topic = topic_service::create(&state.db, &body).await?;
    Ok((StatusCode::CREATED, Json(TopicBody { topic })))
}
