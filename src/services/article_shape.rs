//! Shaping of raw joined rows into the public article representation.

use std::collections::HashMap;

use crate::models::article::{Article, ArticleCommentRow};

/// Collapse `articles LEFT JOIN comments` rows into one article per
/// distinct `article_id`, in first-seen order.
///
/// `comment_count` is the number of non-null comment ids seen for that
/// article, so a comment-less article (one row with a null comment id)
/// comes out with a count of zero.
pub fn collapse_rows(rows: Vec<ArticleCommentRow>) -> Vec<Article> {
    let mut articles: Vec<Article> = Vec::new();
    let mut positions: HashMap<i32, usize> = HashMap::new();

    for row in rows {
        let counted = i32::from(row.comment_id.is_some());
        match positions.get(&row.article_id) {
            Some(&idx) => articles[idx].comment_count += counted,
            None => {
                positions.insert(row.article_id, articles.len());
                articles.push(Article {
                    article_id: row.article_id,
                    title: row.title,
                    topic: row.topic,
                    author: row.author,
                    body: row.body,
                    created_at: row.created_at,
                    votes: row.votes,
                    article_img_url: row.article_img_url,
                    comment_count: counted,
                });
            }
        }
    }

    articles
}
