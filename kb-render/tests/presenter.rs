use std::cell::RefCell;

use kb_api::{FallbackResult, MatchedResult, PaginationState, ResultItem, SearchResultSet};
use kb_render::{present, render_page, Catalog, Localizer};

fn matched(title: &str, slug: &str) -> ResultItem {
    ResultItem::Matched(MatchedResult {
        title: title.into(),
        url: format!("/en-US/kb/{slug}"),
        summary_html: format!("<p>About {title}</p>"),
        score: 1.0,
    })
}

fn fallback(title: &str, slug: &str) -> ResultItem {
    ResultItem::Fallback(FallbackResult {
        title: title.into(),
        url: format!("/en-US/kb/{slug}"),
        summary_text: format!("Learn about {title}"),
    })
}

fn matched_set(count: u64, items: Vec<ResultItem>) -> SearchResultSet {
    SearchResultSet {
        query: "crash".into(),
        product_label: "Firefox".into(),
        count,
        items,
        fallback_results: vec![fallback("Unused", "unused")],
        language: "English".into(),
    }
}

#[test]
fn plural_header_and_blocks_in_order() {
    let set = matched_set(12, vec![matched("Alpha", "alpha"), matched("Beta", "beta")]);
    let body = present(&set, &Catalog::english());
    assert!(!body.fallback);
    assert_eq!(
        body.header,
        "Found <strong>12</strong> results for <strong>crash</strong> for <strong>Firefox</strong>"
    );
    assert_eq!(body.blocks.len(), 2);
    assert!(body.blocks[0].contains("Alpha"));
    assert!(body.blocks[1].contains("Beta"));
    assert!(body.blocks[0].contains("<div class=\"summary\"><p>About Alpha</p></div>"));
    assert!(!body.to_html().contains("Unused"));
}

#[test]
fn singular_header_for_one_match() {
    let set = matched_set(1, vec![matched("Alpha", "alpha")]);
    let body = present(&set, &Catalog::english());
    assert!(body.header.starts_with("Found <strong>1</strong> result for"));
}

#[test]
fn positive_count_with_no_items_renders_empty_list() {
    let set = matched_set(3, vec![]);
    let body = present(&set, &Catalog::english());
    assert!(body.blocks.is_empty());
    assert!(body.to_html().ends_with("<div class=\"results\"></div>"));
}

#[test]
fn zero_matches_render_fallback_with_two_anchors_each() {
    let set = SearchResultSet {
        query: "zzz".into(),
        product_label: "Firefox".into(),
        count: 0,
        items: vec![],
        fallback_results: vec![fallback("Get started", "get-started"), fallback("Sync", "sync")],
        language: "Deutsch".into(),
    };
    let body = present(&set, &Catalog::english());
    assert!(body.fallback);
    assert!(body.header.contains("zzz"));
    assert!(body.header.contains("Deutsch"));
    assert_eq!(body.blocks.len(), 2);
    assert!(body.blocks[0].contains("Get started"));
    assert!(body.blocks[1].contains("Sync"));
    for (block, slug) in body.blocks.iter().zip(["get-started", "sync"]) {
        let href = format!("href=\"/en-US/kb/{slug}\"");
        assert_eq!(block.matches(&href).count(), 2, "{block}");
        assert_eq!(block.matches("<a ").count(), 2, "{block}");
    }
    assert!(body.to_html().contains("<ul class=\"fallback-results\">"));
}

#[test]
fn user_text_is_escaped() {
    let mut set = matched_set(1, vec![matched("<b>x</b>", "x")]);
    set.query = "<script>alert(1)</script>".into();
    let body = present(&set, &Catalog::english());
    assert!(body.header.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(body.blocks[0].contains("&lt;b&gt;x&lt;/b&gt;"));
}

#[derive(Default)]
struct Recording {
    calls: RefCell<Vec<(String, Vec<(String, String)>, Option<u64>)>>,
}

impl Localizer for Recording {
    fn localize(&self, key: &str, params: &[(&str, &str)], count: Option<u64>) -> String {
        self.calls.borrow_mut().push((
            key.to_string(),
            params.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
            count,
        ));
        format!("[{key}]")
    }
}

#[test]
fn localizer_receives_explicit_params_and_count() {
    let l10n = Recording::default();
    let set = matched_set(7, vec![]);
    let body = present(&set, &l10n);
    assert_eq!(body.header, "[search.results_header]");
    let calls = l10n.calls.borrow();
    assert_eq!(calls.len(), 1);
    let (key, params, count) = &calls[0];
    assert_eq!(key, "search.results_header");
    assert_eq!(*count, Some(7));
    assert!(params.contains(&("q".to_string(), "crash".to_string())));
    assert!(params.contains(&("product".to_string(), "Firefox".to_string())));
    assert!(params.contains(&("n".to_string(), "7".to_string())));
}

#[test]
fn page_driver_appends_strip_only_for_multiple_pages() {
    let l10n = Catalog::english();
    let set = matched_set(25, vec![matched("Alpha", "alpha")]);

    let multi = PaginationState::new(2, 3, "/en-US/search?q=crash").expect("valid");
    let html = render_page(&set, &multi, &[1, 2, 3], &l10n);
    assert!(html.starts_with("<h2 class=\"results-header\">"));
    assert!(html.contains("<ol class=\"pagination\""));

    let single = PaginationState::new(1, 1, "/en-US/search?q=crash").expect("valid");
    let html = render_page(&set, &single, &[1], &l10n);
    assert!(!html.contains("pagination"));
}
