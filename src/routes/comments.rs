//! Comment routes addressed by comment id.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;

use crate::errors::AppError;
use crate::models::article::VoteUpdate;
use crate::routes::articles::CommentBody;
use crate::services::comment as comment_service;
use crate::AppState;

/// PATCH /api/comments/{comment_id} -- change the vote count.
pub async fn update_votes(
    State(state): State<AppState>,
    WithRejection(Path(comment_id), _): WithRejection<Path<i32>, AppError>,
    WithRejection(Json(body), _): WithRejection<Json<VoteUpdate>, AppError>,
) -> Result<Json<CommentBody>, AppError> {
    let comment = comment_service::update_votes(&state.db, comment_id, body.inc_votes).await?;
    Ok(Json(CommentBody { comment }))
}

/// DELETE /api/comments/{comment_id}
pub async fn delete(
    State(state): State<AppState>,
    WithRejection(Path(comment_id), _): WithRejection<Path<i32>, AppError>,
) -> Result<StatusCode, AppError> {
    comment_service::delete(&state.db, comment_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
