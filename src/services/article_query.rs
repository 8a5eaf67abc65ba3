//! SQL construction for the article listing.
//!
//! Only trusted identifiers from [`SortColumn`] and [`SortOrder`] are ever
//! written into the statement text. The topic filter and the page window
//! are always bound parameters.

use crate::models::article::{SortColumn, SortOrder};

/// Listing statement shape: which filter is active and how rows are ordered.
#[derive(Debug, Clone, Copy)]
pub struct ArticleListingQuery {
    pub filter_by_topic: bool,
    pub sort: SortColumn,
    pub order: SortOrder,
}

impl ArticleListingQuery {
    pub fn new(filter_by_topic: bool, sort: SortColumn, order: SortOrder) -> Self {
        Self {
            filter_by_topic,
            sort,
            order,
        }
    }

    /// WHERE clause and the number of placeholders it consumes.
    fn where_clause(&self) -> (String, u32) {
        let mut conditions: Vec<String> = Vec::new();
        let mut param_index = 0u32;

        if self.filter_by_topic {
            param_index += 1;
            conditions.push(format!("articles.topic = ${param_index}"));
        }

        let clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };
        (clause, param_index)
    }

    /// ORDER BY keys: the requested column, then newest first, then the
    /// highest id, so equal sort keys page deterministically.
    fn order_clause(&self) -> String {
        let mut keys = vec![format!("{} {}", self.sort.column(), self.order.keyword())];
        if self.sort != SortColumn::CreatedAt {
            keys.push("articles.created_at DESC".to_string());
        }
        if self.sort != SortColumn::ArticleId {
            keys.push("articles.article_id DESC".to_string());
        }
        format!("ORDER BY {}", keys.join(", "))
    }

    /// Page of articles with their comment counts.
    ///
    /// Bind order: topic (when filtered), limit, offset.
    pub fn data_sql(&self) -> String {
        let (where_clause, param_index) = self.where_clause();
        let limit_index = param_index + 1;
        let offset_index = param_index + 2;
        format!(
            "SELECT articles.article_id, articles.title, articles.topic, articles.author, \
             articles.created_at, articles.votes, articles.article_img_url, \
             CAST(COUNT(comments.comment_id) AS INT) AS comment_count \
             FROM articles \
             LEFT JOIN comments ON comments.article_id = articles.article_id \
             {where_clause} \
             GROUP BY articles.article_id \
             {} \
             LIMIT ${limit_index} OFFSET ${offset_index}",
            self.order_clause()
        )
    }

    /// Total number of articles matching the filter, ignoring the page window.
    ///
    /// Bind order: topic (when filtered).
    pub fn count_sql(&self) -> String {
        let (where_clause, _) = self.where_clause();
        format!("SELECT COUNT(*) FROM articles {where_clause}")
    }
}
