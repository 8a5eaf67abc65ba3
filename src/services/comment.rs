//! Comment service: per-article listing, creation, voting and deletion.

use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::comment::{Comment, CreateComment};
use crate::models::pagination::Page;
use crate::services::article as article_service;

/// List one page of an article's comments, newest first.
pub async fn list_for_article(
    pool: &PgPool,
    article_id: i32,
    page: &Page,
) -> Result<Vec<Comment>, AppError> {
    article_service::ensure_exists(pool, article_id).await?;

    let comments = sqlx::query_as::<_, Comment>(
        "SELECT comment_id, article_id, author, body, votes, created_at \
         FROM comments WHERE article_id = $1 \
         ORDER BY created_at DESC, comment_id DESC LIMIT $2 OFFSET $3",
    )
    .bind(article_id)
    .bind(page.limit())
    .bind(page.offset())
    .fetch_all(pool)
    .await?;

    Ok(comments)
}

/// Add a comment to an article. Unknown articles and users are rejected by
/// the store's foreign keys.
pub async fn create(
    pool: &PgPool,
    article_id: i32,
    input: &CreateComment,
) -> Result<Comment, AppError> {
    let comment = sqlx::query_as::<_, Comment>(
        r#"
        INSERT INTO comments (author, body, article_id)
        VALUES ($1, $2, $3)
        RETURNING comment_id, article_id, author, body, votes, created_at
        "#,
    )
    .bind(&input.username)
    .bind(&input.body)
    .bind(article_id)
    .fetch_one(pool)
    .await?;

    tracing::info!(comment_id = comment.comment_id, article_id, "Comment created");
    Ok(comment)
}

/// Add `inc_votes` (possibly negative) to a comment's vote count.
pub async fn update_votes(
    pool: &PgPool,
    comment_id: i32,
    inc_votes: i32,
) -> Result<Comment, AppError> {
    sqlx::query_as::<_, Comment>(
        "UPDATE comments SET votes = votes + $1 WHERE comment_id = $2 \
         RETURNING comment_id, article_id, author, body, votes, created_at",
    )
    .bind(inc_votes)
    .bind(comment_id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| missing_comment(comment_id))
}

pub async fn delete(pool: &PgPool, comment_id: i32) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM comments WHERE comment_id = $1")
        .bind(comment_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(missing_comment(comment_id));
    }
    tracing::info!(comment_id, "Comment deleted");
    Ok(())
}

fn missing_comment(comment_id: i32) -> AppError {
    AppError::not_found(format!("No comment found for comment_id {comment_id}"))
}
