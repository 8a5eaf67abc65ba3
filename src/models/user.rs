//! User model.

use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow, PartialEq)]
pub struct User {
    pub username: String,
    pub name: String,
    pub avatar_url: Option<String>,
}
