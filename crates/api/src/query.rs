//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Page-based pagination parameters (`?page=&pageSize=`).
///
/// Values are resolved into a `LIMIT`/`OFFSET` window by
/// `movie_rating_core::pagination::PageWindow::resolve`.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
    #[serde(rename = "pageSize", alias = "page_size")]
    pub page_size: Option<i64>,
}
