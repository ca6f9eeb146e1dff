//! Shared pagination helper
//!
//! Page-based slicing used by both the staff and loan listings. Pages are
//! 1-indexed; an out-of-range page yields an empty slice, not an error.

use serde::{Deserialize, Serialize};

/// Query parameters for paginated listings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

impl PageParams {
    /// Effective page number (1-indexed, default 1; zero falls back to 1)
    pub fn page(&self) -> usize {
        self.page.filter(|p| *p > 0).unwrap_or(1)
    }

    /// Effective page size (default 10; zero falls back to 10)
    pub fn limit(&self) -> usize {
        self.limit.filter(|l| *l > 0).unwrap_or(10)
    }
}

/// Pagination metadata included in listing responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub total: usize,
    #[serde(rename = "currentPage")]
    pub current_page: usize,
    #[serde(rename = "totalPages")]
    pub total_pages: usize,
    pub limit: usize,
}

/// Slice `data` for the requested page and describe the full collection.
pub fn paginate<T: Clone>(data: &[T], params: &PageParams) -> (Vec<T>, PageMeta) {
    let page = params.page();
    let limit = params.limit();

    let total = data.len();
    let start = (page - 1).saturating_mul(limit);
    let end = start.saturating_add(limit).min(total);
    let items = if start < total {
        data[start..end].to_vec()
    } else {
        Vec::new()
    };

    let meta = PageMeta {
        total,
        current_page: page,
        total_pages: total.div_ceil(limit),
        limit,
    };

    (items, meta)
}
