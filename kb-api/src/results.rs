#[cfg(feature = "json")]
use serde::Serialize;

/// A document that matched the query. `summary_html` is markup produced
/// upstream and is emitted as-is.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize))]
pub struct MatchedResult {
    pub title: String,
    pub url: String,
    pub summary_html: String,
    pub score: f32,
}

/// A suggested article shown when nothing matched.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(Serialize))]
pub struct FallbackResult {
    pub title: String,
    pub url: String,
    pub summary_text: String,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize))]
#[cfg_attr(feature = "json", serde(tag = "kind", rename_all = "snake_case"))]
pub enum ResultItem {
    Matched(MatchedResult),
    Fallback(FallbackResult),
}

impl ResultItem {
    pub fn title(&self) -> &str {
        match self {
            ResultItem::Matched(m) => &m.title,
            ResultItem::Fallback(f) => &f.title,
        }
    }

    pub fn url(&self) -> &str {
        match self {
            ResultItem::Matched(m) => &m.url,
            ResultItem::Fallback(f) => &f.url,
        }
    }
}

impl From<MatchedResult> for ResultItem {
    fn from(m: MatchedResult) -> Self {
        ResultItem::Matched(m)
    }
}

impl From<FallbackResult> for ResultItem {
    fn from(f: FallbackResult) -> Self {
        ResultItem::Fallback(f)
    }
}

/// Everything the presenter needs for one results page.
///
/// `count` is the total number of matches across all pages, `items` only the
/// current page. `fallback_results` and `language` are read when `count == 0`.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "json", derive(Serialize))]
pub struct SearchResultSet {
    pub query: String,
    pub product_label: String,
    pub count: u64,
    pub items: Vec<ResultItem>,
    pub fallback_results: Vec<ResultItem>,
    pub language: String,
}

impl SearchResultSet {
    pub fn has_matches(&self) -> bool {
        self.count > 0
    }
}
