//! Topic model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, Serialize, FromRow, PartialEq)]
pub struct Topic {
    pub slug: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTopic {
    #[validate(length(min = 1))]
    pub slug: String,
    #[validate(length(min = 1))]
    pub description: String,
}
