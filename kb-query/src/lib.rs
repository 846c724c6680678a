pub mod link;
pub mod params;

pub use link::{with_page, PAGE_PARAM};
pub use params::{ParamsError, SearchParams};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryFilters {
    pub product: Option<String>,
    pub locale: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    pub terms: Vec<String>,
    pub filters: QueryFilters,
}

impl ParsedQuery {
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Parse a raw query string into free-text terms and supported filters.
/// Supported filters: `product:<slug>`, `locale:<code>` (case-insensitive keys).
/// - Values are lowercased and stripped of surrounding quotes.
/// - Unknown tokens are treated as free-text terms.
/// - Multiple occurrences: the last one wins.
pub fn parse_query(input: &str) -> ParsedQuery {
    let mut terms: Vec<String> = Vec::new();
    let mut filters = QueryFilters::default();

    for raw in input.split_whitespace() {
        if let Some((k, v)) = raw.split_once(':') {
            let slot = match k.to_ascii_lowercase().as_str() {
                "product" => Some(&mut filters.product),
                "locale" => Some(&mut filters.locale),
                _ => None,
            };
            if let Some(slot) = slot {
                let v = strip_quotes(v).to_ascii_lowercase();
                if !v.is_empty() {
                    *slot = Some(v);
                }
                continue;
            }
        }
        terms.push(raw.to_string());
    }

    ParsedQuery { terms, filters }
}

fn strip_quotes(s: &str) -> &str {
    let bytes = s.as_bytes();
    if bytes.len() >= 2 {
        let first = bytes[0];
        let last = bytes[bytes.len() - 1];
        if (first == b'"' && last == b'"') || (first == b'\'' && last == b'\'') {
            return &s[1..s.len() - 1];
        }
    }
    s
}
