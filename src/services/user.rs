//! User lookups.

use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::user::User;

pub async fn list(pool: &PgPool) -> Result<Vec<User>, AppError> {
    let users = sqlx::query_as::<_, User>(
        "SELECT username, name, avatar_url FROM users ORDER BY username",
    )
    .fetch_all(pool)
    .await?;
    Ok(users)
}

pub async fn find_by_username(pool: &PgPool, username: &str) -> Result<User, AppError> {
    sqlx::query_as::<_, User>("SELECT username, name, avatar_url FROM users WHERE username = $1")
        .bind(username)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::not_found(format!("No user found for username: {username}")))
}
