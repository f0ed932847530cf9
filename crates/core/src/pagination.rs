//! Page-based pagination policy for list endpoints.
//!
//! Callers pass a 1-based `page` and a `page_size`. The offset only applies
//! when both are supplied; a lone `page` without a size starts from the
//! first record.

/// Page size used when the caller does not supply one.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Upper bound on a single page.
pub const MAX_PAGE_SIZE: i64 = 1000;

/// A resolved `LIMIT` / `OFFSET` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub limit: i64,
    pub offset: i64,
}

impl PageWindow {
    /// Resolve raw query parameters into a window.
    ///
    /// - `page_size` defaults to [`DEFAULT_PAGE_SIZE`], is floored at 0 and
    ///   capped at [`MAX_PAGE_SIZE`].
    /// - `page` is floored at 1.
    /// - `offset = page_size * (page - 1)` when both are present, else 0.
    pub fn resolve(page: Option<i64>, page_size: Option<i64>) -> Self {
        let limit = page_size
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(0, MAX_PAGE_SIZE);

        let offset = match (page, page_size) {
            (Some(page), Some(_)) => limit.saturating_mul(page.max(1) - 1),
            _ => 0,
        };

        Self { limit, offset }
    }

    /// Whether the window can never yield a row.
    pub fn is_empty(&self) -> bool {
        self.limit == 0
    }
}
