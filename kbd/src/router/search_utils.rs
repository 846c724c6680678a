use anyhow::Result;

use kb_api::{FallbackResult, MatchedResult, PaginationState, ResultItem, SearchResultSet};
use kb_render::{canonical_locale, escape_html, language_name, visible_window, Localizer};

use crate::catalog::{Document, SearchHit};
use crate::query::{parse_query, SearchParams};
use crate::services;

const EXCERPT_CHARS: usize = 200;

/// Everything one results page needs, resolved from the backend.
pub(crate) struct SearchOutcome {
    pub set: SearchResultSet,
    pub state: PaginationState,
    pub window: Vec<u32>,
    pub locale: String,
}

pub(crate) fn run_search(params: &SearchParams, locale: &str, path: &str) -> Result<SearchOutcome> {
    let config = services::config();
    let backend = services::backend();
    let pq = parse_query(&params.q);
    let locale = pq
        .filters
        .locale
        .as_deref()
        .and_then(canonical_locale)
        .unwrap_or(locale)
        .to_string();
    let product = params.product.as_deref().or(pq.filters.product.as_deref());

    let mut page = backend.search(&pq, &locale, product, params.page, config.per_page)?;
    let state = PaginationState::from_count(
        page.total,
        config.per_page,
        params.page,
        params.base_url(path),
    )?;
    if state.current_page != params.page {
        // requested page was past the end; show the clamped one instead
        page = backend.search(&pq, &locale, product, state.current_page, config.per_page)?;
    }

    let fallback_results = if page.total == 0 {
        backend
            .suggestions(&locale, product, config.fallback_limit)?
            .iter()
            .map(to_fallback)
            .collect()
    } else {
        Vec::new()
    };

    let product_label = match product {
        Some(slug) => backend.product_label(slug).unwrap_or_else(|| slug.to_string()),
        None => services::localizer().localize("search.all_products", &[], None),
    };

    let window = visible_window(state.current_page, state.total_pages, config.page_radius);
    tracing::debug!(
        "[search] q={:?} locale={} product={:?} total={} page={}/{}",
        params.q,
        locale,
        product,
        page.total,
        state.current_page,
        state.total_pages
    );

    let set = SearchResultSet {
        query: params.q.clone(),
        product_label,
        count: page.total,
        items: page.hits.iter().map(to_matched).collect(),
        fallback_results,
        language: language_name(&locale),
    };
    Ok(SearchOutcome { set, state, window, locale })
}

fn to_matched(hit: &SearchHit) -> ResultItem {
    ResultItem::Matched(MatchedResult {
        title: hit.doc.title.clone(),
        url: hit.doc.url(),
        summary_html: escape_html(&hit.doc.excerpt(EXCERPT_CHARS)),
        score: hit.score,
    })
}

fn to_fallback(doc: &Document) -> ResultItem {
    ResultItem::Fallback(FallbackResult {
        title: doc.title.clone(),
        url: doc.url(),
        summary_text: doc.summary.clone(),
    })
}
