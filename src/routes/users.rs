//! User routes.

use axum::{
    extract::{Path, State},
    Json,
};
use axum_extra::extract::WithRejection;
use serde::Serialize;

use crate::errors::AppError;
use crate::models::user::User;
use crate::services::user as user_service;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct UsersBody {
    pub users: Vec<User>,
}

#[derive(Debug, Serialize)]
pub struct UserBody {
    pub user: User,
}

/// GET /api/users
pub async fn list(State(state): State<AppState>) -> Result<Json<UsersBody>, AppError> {
    let users = user_service::list(&state.db).await?;
    Ok(Json(UsersBody { users }))
}

/// GET /api/users/{username}
pub async fn get_by_username(
    State(state): State<AppState>,
    WithRejection(Path(username), _): WithRejection<Path<String>, AppError>,
) -> Result<Json<UserBody>, AppError> {
    let user = user_service::find_by_username(&state.db, &username).await?;
    Ok(Json(UserBody { user }))
}
