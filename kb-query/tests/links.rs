use kb_query::{params::parse_page, with_page, ParamsError, SearchParams};

#[test]
fn with_page_appends_to_url_without_query() {
    assert_eq!(with_page("/en-US/search", 3), "/en-US/search?page=3");
}

#[test]
fn with_page_keeps_other_params_and_replaces_existing_page() {
    assert_eq!(
        with_page("/en-US/search?q=crash&page=7&product=firefox", 2),
        "/en-US/search?q=crash&product=firefox&page=2"
    );
}

#[test]
fn with_page_preserves_fragment() {
    assert_eq!(with_page("/search?q=a#results", 4), "/search?q=a&page=4#results");
}

#[test]
fn with_page_reencodes_query_values() {
    assert_eq!(with_page("/search?q=two%20words", 1), "/search?q=two+words&page=1");
}

#[test]
fn params_parse_and_decode() {
    let p = SearchParams::from_query_string("q=clear+cache%21&page=3&product=Firefox&x=1");
    assert_eq!(p.q, "clear cache!");
    assert_eq!(p.page, 3);
    assert_eq!(p.product.as_deref(), Some("firefox"));
}

#[test]
fn params_bad_page_falls_back_to_first() {
    assert_eq!(SearchParams::from_query_string("q=a&page=abc").page, 1);
    assert_eq!(SearchParams::from_query_string("q=a&page=0").page, 1);
    assert_eq!(SearchParams::from_query_string("q=a").page, 1);
    assert_eq!(parse_page("-2"), Err(ParamsError::InvalidPage("-2".into())));
}

#[test]
fn params_empty_product_is_none() {
    let p = SearchParams::from_query_string("q=a&product=");
    assert_eq!(p.product, None);
}

#[test]
fn base_url_never_carries_page() {
    let p = SearchParams::from_query_string("q=tabs+crash&page=5&product=firefox");
    assert_eq!(p.base_url("/en-US/search"), "/en-US/search?q=tabs+crash&product=firefox");
    assert_eq!(with_page(&p.base_url("/en-US/search"), 5), "/en-US/search?q=tabs+crash&product=firefox&page=5");
}
