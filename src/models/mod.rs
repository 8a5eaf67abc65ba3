//! Database models and DTOs for all domain entities.

pub mod article;
pub mod comment;
pub mod pagination;
pub mod topic;
pub mod user;
