use serde::{Deserialize, Serialize};

/// Paginated list envelope `{ data, meta }` returned by resource endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub meta: PaginationMeta,
}

impl<T> Default for PaginatedResponse<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            meta: PaginationMeta::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaginationMeta {
    pub total: u64,
    /// 1-based page number
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
}

impl PaginationMeta {
    /// Page count, derived from `total`/`limit` when the server omits it
    pub fn page_count(&self) -> u64 {
        if self.total_pages > 0 {
            return self.total_pages;
        }
        if self.limit == 0 {
            return 0;
        }
        self.total.div_ceil(self.limit)
    }
}
