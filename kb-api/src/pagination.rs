#[cfg(feature = "json")]
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaginationError {
    #[error("page {page} outside 1..={total}")]
    PageOutOfRange { page: u32, total: u32 },
    #[error("total page count must be at least 1")]
    NoPages,
    #[error("page size must be at least 1")]
    ZeroPageSize,
}

/// Position of the current request within the paged result list.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(Serialize))]
pub struct PaginationState {
    pub current_page: u32,
    pub total_pages: u32,
    /// URL of the results page without any `page` parameter.
    pub base_url: String,
    pub has_previous: bool,
    pub has_next: bool,
}

impl PaginationState {
    pub fn new(
        current_page: u32,
        total_pages: u32,
        base_url: impl Into<String>,
    ) -> Result<Self, PaginationError> {
        let state = Self {
            current_page,
            total_pages,
            base_url: base_url.into(),
            has_previous: current_page > 1,
            has_next: current_page < total_pages,
        };
        state.validate()?;
        Ok(state)
    }

    /// Derive the page count from a match count and clamp `requested_page`
    /// into range. A zero count still yields a single (empty) page.
    pub fn from_count(
        count: u64,
        per_page: u32,
        requested_page: u32,
        base_url: impl Into<String>,
    ) -> Result<Self, PaginationError> {
        if per_page == 0 {
            return Err(PaginationError::ZeroPageSize);
        }
        let pages = count.div_ceil(per_page as u64).max(1);
        let total_pages = u32::try_from(pages).unwrap_or(u32::MAX);
        let current_page = requested_page.clamp(1, total_pages);
        Self::new(current_page, total_pages, base_url)
    }

    pub fn validate(&self) -> Result<(), PaginationError> {
        if self.total_pages == 0 {
            return Err(PaginationError::NoPages);
        }
        if self.current_page == 0 || self.current_page > self.total_pages {
            return Err(PaginationError::PageOutOfRange {
                page: self.current_page,
                total: self.total_pages,
            });
        }
        Ok(())
    }
}

/// One element of the pagination strip.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(Serialize))]
#[cfg_attr(feature = "json", serde(tag = "kind", rename_all = "snake_case"))]
pub enum PageRangeEntry {
    Prev { page: u32, href: String },
    Page { number: u32, href: String, selected: bool },
    Ellipsis,
    Next { page: u32, href: String },
}

impl PageRangeEntry {
    pub fn href(&self) -> Option<&str> {
        match self {
            PageRangeEntry::Prev { href, .. }
            | PageRangeEntry::Page { href, .. }
            | PageRangeEntry::Next { href, .. } => Some(href),
            PageRangeEntry::Ellipsis => None,
        }
    }

    pub fn is_selected(&self) -> bool {
        matches!(self, PageRangeEntry::Page { selected: true, .. })
    }
}
