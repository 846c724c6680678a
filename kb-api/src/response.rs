#[cfg(feature = "json")]
use serde::Serialize;

use crate::pagination::PageRangeEntry;
use crate::results::ResultItem;

/// JSON body of `GET /api/search`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize))]
pub struct SearchResponse {
    pub query: String,
    pub product: String,
    pub language: String,
    pub total: u64,
    pub page: u32,
    pub total_pages: u32,
    pub results: Vec<ResultItem>,
    pub fallback_results: Vec<ResultItem>,
    pub pagination: Vec<PageRangeEntry>,
}
