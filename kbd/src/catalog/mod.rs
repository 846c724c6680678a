use anyhow::Result;
use serde::Deserialize;

use crate::query::ParsedQuery;

pub mod memory;

pub use memory::MemoryCatalog;

/// Body prefix of an article that only redirects elsewhere; such articles are never searchable.
pub const REDIRECT_HTML: &str = "<p>REDIRECT <a ";

/// A knowledge-base article as stored in the catalog.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Document {
    pub slug: String,
    pub locale: String,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    /// Rendered article body.
    #[serde(default)]
    pub html: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Product slugs this article applies to.
    #[serde(default)]
    pub products: Vec<String>,
    #[serde(default)]
    pub is_archived: bool,
    /// Offered as a suggestion when a search finds nothing.
    #[serde(default)]
    pub featured: bool,
}

impl Document {
    pub fn url(&self) -> String {
        format!("/{}/kb/{}", self.locale, self.slug)
    }

    pub fn is_redirect(&self) -> bool {
        self.html.starts_with(REDIRECT_HTML)
    }

    /// Body with markup removed and whitespace collapsed.
    pub fn body_text(&self) -> String {
        let mut out = String::with_capacity(self.html.len());
        let mut in_tag = false;
        for c in self.html.chars() {
            match c {
                '<' => {
                    in_tag = true;
                    out.push(' ');
                }
                '>' if in_tag => in_tag = false,
                _ if !in_tag => out.push(c),
                _ => {}
            }
        }
        out.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Plain-text blurb for result listings: the summary, else the start of the body.
    pub fn excerpt(&self, max_chars: usize) -> String {
        if !self.summary.trim().is_empty() {
            return self.summary.trim().to_string();
        }
        let body = self.body_text();
        match body.char_indices().nth(max_chars) {
            Some((idx, _)) => format!("{}…", body[..idx].trim_end()),
            None => body,
        }
    }

    pub fn applies_to(&self, product: Option<&str>) -> bool {
        match product {
            Some(p) => self.products.iter().any(|x| x.eq_ignore_ascii_case(p)),
            None => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub slug: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub doc: Document,
    pub score: f32,
}

/// One page of hits plus the total match count across all pages.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchPage {
    pub total: u64,
    pub hits: Vec<SearchHit>,
}

/// Search collaborator behind the results page.
/// Implementations must never return archived or redirect documents.
pub trait SearchBackend: Send + Sync {
    fn backend_name(&self) -> &'static str;

    /// Matches for `query` in `locale`, page is 1-based.
    fn search(
        &self,
        query: &ParsedQuery,
        locale: &str,
        product: Option<&str>,
        page: u32,
        per_page: u32,
    ) -> Result<SearchPage>;

    /// Articles to suggest when a search finds nothing.
    fn suggestions(&self, locale: &str, product: Option<&str>, limit: usize) -> Result<Vec<Document>>;

    fn product_label(&self, slug: &str) -> Option<String>;
}
