//! Business logic and SQL for each resource.

pub mod article;
pub mod article_query;
pub mod article_shape;
pub mod comment;
pub mod endpoints;
pub mod topic;
pub mod user;
