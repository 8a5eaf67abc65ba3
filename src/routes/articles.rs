//! Article routes: listing, retrieval, creation, voting, deletion and the
//! per-article comment collection.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;
use serde::Serialize;
use validator::Validate;

use crate::errors::AppError;
use crate::models::article::{Article, ArticleListing, CreateArticle, VoteUpdate};
use crate::models::comment::{Comment, CreateComment};
use crate::models::pagination::PageParams;
use crate::services::article::{self as article_service, ArticleFilters};
use crate::services::comment as comment_service;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct ArticleBody {
    pub article: Article,
}

#[derive(Debug, Serialize)]
pub struct CommentBody {
    pub comment: Comment,
}

#[derive(Debug, Serialize)]
pub struct CommentsBody {
    pub comments: Vec<Comment>,
}

/// GET /api/articles -- list articles with topic filter, sorting and pagination.
pub async fn list(
    State(state): State<AppState>,
    WithRejection(Query(filters), _): WithRejection<Query<ArticleFilters>, AppError>,
    WithRejection(Query(page), _): WithRejection<Query<PageParams>, AppError>,
) -> Result<Json<ArticleListing>, AppError> {
    // Validate everything before touching the store.
    let filters = filters.resolve()?;
    let page = page.resolve(state.config.max_page_limit)?;
    let listing = article_service::list(&state.db, &filters, &page).await?;
    Ok(Json(listing))
}

/// POST /api/articles -- create an article.
pub async fn create(
    State(state): State<AppState>,
    WithRejection(Json(body), _): WithRejection<Json<CreateArticle>, AppError>,
) -> Result<(StatusCode, Json<ArticleBody>), AppError> {
    body.validate()?;
    let article = article_service::create(&state.db, &body).await?;
    Ok((StatusCode::CREATED, Json(ArticleBody { article })))
}

/// GET /api/articles/{article_id} -- a single article with body and comment count.
pub async fn get_by_id(
    State(state): State<AppState>,
    WithRejection(Path(article_id), _): WithRejection<Path<i32>, AppError>,
) -> Result<Json<ArticleBody>, AppError> {
    let article = article_service::find_by_id(&state.db, article_id).await?;
    Ok(Json(ArticleBody { article }))
}

/// PATCH /api/articles/{article_id} -- change the vote count.
pub async fn update_votes(
    State(state): State<AppState>,
    WithRejection(Path(article_id), _): WithRejection<Path<i32>, AppError>,
    WithRejection(Json(body), _): WithRejection<Json<VoteUpdate>, AppError>,
) -> Result<Json<ArticleBody>, AppError> {
    let article = article_service::update_votes(&state.db, article_id, body.inc_votes).await?;
    Ok(Json(ArticleBody { article }))
}

/// DELETE /api/articles/{article_id} -- delete an article and its comments.
pub async fn delete(
    State(state): State<AppState>,
    WithRejection(Path(article_id), _): WithRejection<Path<i32>, AppError>,
) -> Result<StatusCode, AppError> {
    article_service::delete(&state.db, article_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/articles/{article_id}/comments -- a page of comments, newest first.
pub async fn list_comments(
    State(state): State<AppState>,
    WithRejection(Path(article_id), _): WithRejection<Path<i32>, AppError>,
    WithRejection(Query(page), _): WithRejection<Query<PageParams>, AppError>,
) -> Result<Json<CommentsBody>, AppError> {
    let page = page.resolve(state.config.max_page_limit)?;
    let comments = comment_service::list_for_article(&state.db, article_id, &page).await?;
    Ok(Json(CommentsBody { comments }))
}

/// POST /api/articles/{article_id}/comments -- add a comment.
pub async fn add_comment(
    State(state): State<AppState>,
    WithRejection(Path(article_id), _): WithRejection<Path<i32>, AppError>,
    WithRejection(Json(body), _): WithRejection<Json<CreateComment>, AppError>,
) -> Result<(StatusCode, Json<CommentBody>), AppError> {
    body.validate()?;
    let comment = comment_service::create(&state.db, article_id, &body).await?;
    Ok((StatusCode::CREATED, Json(CommentBody { comment })))
}
