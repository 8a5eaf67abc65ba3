//! Article service: listing, retrieval, creation, voting and deletion.

use serde::Deserialize;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::article::{
    Article, ArticleCommentRow, ArticleListing, ArticleSummary, CreateArticle, SortColumn,
    SortOrder,
};
use crate::models::pagination::Page;
use crate::services::article_query::ArticleListingQuery;
use crate::services::article_shape;

/// Filters and ordering for listing articles, as raw query strings.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ArticleFilters {
    pub topic: Option<String>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
}

/// Filters after validation and defaulting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFilters {
    pub topic: Option<String>,
    pub sort: SortColumn,
    pub order: SortOrder,
}

impl ArticleFilters {
    /// Apply defaults and reject anything outside the sort whitelist.
    /// A blank topic means no topic filter.
    pub fn resolve(&self) -> Result<ResolvedFilters, AppError> {
        let sort = match self.sort_by.as_deref() {
            Some(raw) => raw.parse()?,
            None => SortColumn::default(),
        };
        let order = match self.order.as_deref() {
            Some(raw) => raw.parse()?,
            None => SortOrder::default(),
        };
        Ok(ResolvedFilters {
            topic: self.topic.clone().filter(|t| !t.trim().is_empty()),
            sort,
            order,
        })
    }
}

/// List one page of articles together with the total number of matches.
///
/// The count and the page are two independent reads with no shared
/// transaction, so under concurrent writes `total_count` may reflect a
/// different snapshot than `articles`.
pub async fn list(
    pool: &PgPool,
    filters: &ResolvedFilters,
    page: &Page,
) -> Result<ArticleListing, AppError> {
    let query = ArticleListingQuery::new(filters.topic.is_some(), filters.sort, filters.order);
    let count_sql = query.count_sql();
    let data_sql = query.data_sql();

    let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
    let mut data_query = sqlx::query_as::<_, ArticleSummary>(&data_sql);

    if let Some(ref topic) = filters.topic {
        count_query = count_query.bind(topic);
        data_query = data_query.bind(topic);
    }

    let total_count = count_query.fetch_one(pool).await?;
    if total_count == 0 {
        if let Some(ref topic) = filters.topic {
            return Err(AppError::not_found(format!(
                "No articles found for topic: {topic}"
            )));
        }
    }

    let articles = data_query
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(pool)
        .await?;

    tracing::debug!(
        topic = filters.topic.as_deref(),
        sort = ?filters.sort,
        order = ?filters.order,
        limit = page.limit(),
        offset = page.offset(),
        returned = articles.len(),
        total_count,
        "Listed articles"
    );

    Ok(ArticleListing {
        articles,
        total_count,
    })
}

/// Find an article by ID with its comment count.
pub async fn find_by_id(pool: &PgPool, article_id: i32) -> Result<Article, AppError> {
    let rows = sqlx::query_as::<_, ArticleCommentRow>(
        r#"
        SELECT articles.article_id, articles.title, articles.topic, articles.author,
               articles.body, articles.created_at, articles.votes, articles.article_img_url,
               comments.comment_id
        FROM articles
        LEFT JOIN comments ON comments.article_id = articles.article_id
        WHERE articles.article_id = $1
        "#,
    )
    .bind(article_id)
    .fetch_all(pool)
    .await?;

    article_shape::collapse_rows(rows)
        .into_iter()
        .next()
        .ok_or_else(|| {
            AppError::not_found(format!("No article found for article_id: {article_id}"))
        })
}

/// Fail with NotFound unless the article exists.
pub async fn ensure_exists(pool: &PgPool, article_id: i32) -> Result<(), AppError> {
    let exists: bool =
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM articles WHERE article_id = $1)")
            .bind(article_id)
            .fetch_one(pool)
            .await?;
    if exists {
        Ok(())
    } else {
        Err(missing_article(article_id))
    }
}

/// Create an article. Unknown authors and topics are rejected by the store.
pub async fn create(pool: &PgPool, input: &CreateArticle) -> Result<Article, AppError> {
    // Without an image URL the column is left out so the store default applies.
    let (columns, values) = if input.article_img_url.is_some() {
        ("author, title, body, topic, article_img_url", "$1, $2, $3, $4, $5")
    } else {
        ("author, title, body, topic", "$1, $2, $3, $4")
    };
    let sql = format!(
        "INSERT INTO articles ({columns}) VALUES ({values}) RETURNING *, 0 AS comment_count"
    );

    let mut query = sqlx::query_as::<_, Article>(&sql)
        .bind(&input.author)
        .bind(&input.title)
        .bind(&input.body)
        .bind(&input.topic);
    if let Some(ref img_url) = input.article_img_url {
        query = query.bind(img_url);
    }
    let article = query.fetch_one(pool).await?;

    tracing::info!(article_id = article.article_id, topic = %article.topic, "Article created");
    Ok(article)
}

/// Add `inc_votes` (possibly negative) to an article's vote count.
pub async fn update_votes(
    pool: &PgPool,
    article_id: i32,
    inc_votes: i32,
) -> Result<Article, AppError> {
    sqlx::query_as::<_, Article>(
        r#"
        UPDATE articles
        SET votes = votes + $1
        WHERE article_id = $2
        RETURNING *,
            (SELECT CAST(COUNT(*) AS INT) FROM comments
             WHERE comments.article_id = articles.article_id) AS comment_count
        "#,
    )
    .bind(inc_votes)
    .bind(article_id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| missing_article(article_id))
}

/// Delete an article. Its comments go with it.
pub async fn delete(pool: &PgPool, article_id: i32) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM articles WHERE article_id = $1")
        .bind(article_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(missing_article(article_id));
    }
    tracing::info!(article_id, "Article deleted");
    Ok(())
}

fn missing_article(article_id: i32) -> AppError {
    AppError::not_found(format!("No article found for article_id {article_id}"))
}
