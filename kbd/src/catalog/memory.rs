use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::catalog::{Document, Product, SearchBackend, SearchHit, SearchPage};
use crate::query::ParsedQuery;

static SAMPLE_CATALOG: &str = include_str!("sample.json");

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    products: Vec<Product>,
    documents: Vec<Document>,
}

/// Read-only catalog held in memory; documents keep file order.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    products: Vec<Product>,
    documents: Vec<Document>,
}

impl MemoryCatalog {
    pub fn new(products: Vec<Product>, documents: Vec<Document>) -> Self {
        Self { products, documents }
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(s).context("invalid catalog json")?;
        Ok(Self::new(file.products, file.documents))
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog {}", path.display()))?;
        Self::from_json_str(&text).with_context(|| format!("failed to load catalog {}", path.display()))
    }

    pub fn sample() -> Result<Self> {
        Self::from_json_str(SAMPLE_CATALOG)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    fn live_in<'a>(
        &'a self,
        locale: &'a str,
        product: Option<&'a str>,
    ) -> impl Iterator<Item = &'a Document> + 'a {
        self.documents.iter().filter(move |d| {
            !d.is_archived
                && !d.is_redirect()
                && d.locale.eq_ignore_ascii_case(locale)
                && d.applies_to(product)
        })
    }
}

// Every term must hit; title hits weigh double, body hits half.
fn score(doc: &Document, terms: &[String]) -> Option<f32> {
    let title = doc.title.to_lowercase();
    let summary = doc.summary.to_lowercase();
    let body = doc.body_text().to_lowercase();
    let mut total = 0.0f32;
    for term in terms {
        let mut s = 0.0f32;
        if title.contains(term.as_str()) {
            s += 2.0;
        }
        if summary.contains(term.as_str()) {
            s += 1.0;
        }
        if doc.keywords.iter().any(|k| k.to_lowercase().contains(term.as_str())) {
            s += 1.0;
        }
        if body.contains(term.as_str()) {
            s += 0.5;
        }
        if s == 0.0 {
            return None;
        }
        total += s;
    }
    Some(total)
}

impl SearchBackend for MemoryCatalog {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    fn search(
        &self,
        query: &ParsedQuery,
        locale: &str,
        product: Option<&str>,
        page: u32,
        per_page: u32,
    ) -> Result<SearchPage> {
        let terms: Vec<String> = query.terms.iter().map(|t| t.to_lowercase()).collect();
        if terms.is_empty() {
            return Ok(SearchPage::default());
        }
        let mut hits: Vec<SearchHit> = self
            .live_in(locale, product)
            .filter_map(|d| score(d, &terms).map(|score| SearchHit { doc: d.clone(), score }))
            .collect();
        // stable sort keeps catalog order among equal scores
        hits.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));

        let total = hits.len() as u64;
        let skip = (page.max(1) as usize - 1) * per_page as usize;
        let hits: Vec<SearchHit> = hits.into_iter().skip(skip).take(per_page as usize).collect();
        tracing::debug!(
            "[catalog] search terms={:?} locale={} product={:?} page={} total={} returned={}",
            terms,
            locale,
            product,
            page,
            total,
            hits.len()
        );
        Ok(SearchPage { total, hits })
    }

    fn suggestions(&self, locale: &str, product: Option<&str>, limit: usize) -> Result<Vec<Document>> {
        let pick = |product: Option<&str>| -> Vec<Document> {
            self.live_in(locale, product)
                .filter(|d| d.featured)
                .take(limit)
                .cloned()
                .collect()
        };
        let mut docs = pick(product);
        if docs.is_empty() && product.is_some() {
            docs = pick(None);
        }
        Ok(docs)
    }

    fn product_label(&self, slug: &str) -> Option<String> {
        self.products
            .iter()
            .find(|p| p.slug.eq_ignore_ascii_case(slug))
            .map(|p| p.title.clone())
    }
}
