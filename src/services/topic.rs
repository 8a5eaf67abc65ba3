//! Topic service.

use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::topic::{CreateTopic, Topic};

pub async fn list(pool: &PgPool) -> Result<Vec<Topic>, AppError> {
    let topics = sqlx::query_as::<_, Topic>("SELECT slug, description FROM topics ORDER BY slug")
        .fetch_all(pool)
        .await?;
    Ok(topics)
}

/// Create a topic. A duplicate slug is rejected by the store.
pub async fn create(pool: &PgPool, input: &CreateTopic) -> Result<Topic, AppError> {
    let topic = sqlx::query_as::<_, Topic>(
        "INSERT INTO topics (slug, description) VALUES ($1, $2) RETURNING slug, description",
    )
    .bind(&input.slug)
    .bind(&input.description)
    .fetch_one(pool)
    .await?;

    tracing::info!(slug = %topic.slug, "Topic created");
    Ok(topic)
}
