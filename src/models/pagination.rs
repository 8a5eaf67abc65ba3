//! Pagination primitives shared by the list endpoints.

use serde::Deserialize;

use crate::errors::AppError;

/// Raw `limit` / `p` query parameters, parsed lazily so every malformed
/// value is reported the same way.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    pub limit: Option<String>,
    pub p: Option<String>,
}

/// Validated page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    limit: i64,
    page: i64,
}

impl Page {
    /// Default items per page.
    pub const DEFAULT_LIMIT: i64 = 10;

    /// Validate a page window. Both values must be positive and `limit`
    /// may not exceed `max_limit`.
    pub fn new(limit: i64, page: i64, max_limit: i64) -> Result<Self, AppError> {
        if limit < 1 || page < 1 || limit > max_limit {
            return Err(AppError::BadRequest);
        }
        // The offset must stay representable.
        (page - 1).checked_mul(limit).ok_or(AppError::BadRequest)?;
        Ok(Self { limit, page })
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.limit
    }
}

impl PageParams {
    /// Apply defaults and validate.
    pub fn resolve(&self, max_limit: i64) -> Result<Page, AppError> {
        let limit = parse_positive(self.limit.as_deref())?.unwrap_or(Page::DEFAULT_LIMIT);
        let page = parse_positive(self.p.as_deref())?.unwrap_or(1);
        Page::new(limit, page, max_limit)
    }
}

fn parse_positive(raw: Option<&str>) -> Result<Option<i64>, AppError> {
    match raw {
        None => Ok(None),
        Some(value) => match value.trim().parse::<i64>() {
            Ok(n) if n > 0 => Ok(Some(n)),
            _ => Err(AppError::BadRequest),
        },
    }
}
