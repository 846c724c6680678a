pub mod limits;
pub mod pagination;
pub mod response;
pub mod results;
pub mod status;

pub use pagination::{PageRangeEntry, PaginationError, PaginationState};
pub use results::{FallbackResult, MatchedResult, ResultItem, SearchResultSet};
