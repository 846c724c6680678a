use kbd::proto::http_like::{Request, Response};
use kbd::router::handle;

fn get_html(path: &str) -> (Response, String) {
    let resp = handle(Request::get(path)).expect("router should handle");
    let body = String::from_utf8_lossy(&resp.body).to_string();
    (resp, body)
}

#[test]
fn results_page_renders_header_items_and_strip() {
    let (resp, body) = get_html("/en-US/search?q=firefox&page=2");
    assert_eq!(resp.code.as_u16(), 200);
    assert_eq!(resp.header("content-type"), Some("text/html; charset=utf-8"));
    assert!(body.contains("<html lang=\"en-US\">"));
    assert!(body.contains(
        "Found <strong>24</strong> results for <strong>firefox</strong> for <strong>All Products</strong>"
    ));
    assert_eq!(body.matches("<article class=\"result\">").count(), 10);
    assert!(body.contains("<li class=\"prev\"><a href=\"/en-US/search?q=firefox&amp;page=1\" rel=\"prev\">"));
    assert!(body.contains(
        "<li class=\"selected\"><a href=\"/en-US/search?q=firefox&amp;page=2\" aria-current=\"page\">2</a></li>"
    ));
    assert!(body.contains("<li class=\"next\"><a href=\"/en-US/search?q=firefox&amp;page=3\" rel=\"next\">"));
    assert!(!body.contains("class=\"skip\""));
}

#[test]
fn zero_results_page_shows_fallback_without_strip() {
    let (resp, body) = get_html("/en-US/search?q=qwertyuiop");
    assert_eq!(resp.code.as_u16(), 200);
    assert!(body.contains("Sorry! 0 results found for <strong>qwertyuiop</strong> in English."));
    assert_eq!(body.matches("<li class=\"fallback-result\">").count(), 5);
    assert_eq!(body.matches("href=\"/en-US/kb/get-started-firefox\"").count(), 2);
    assert!(!body.contains("<article"));
    assert!(!body.contains("class=\"pagination\""));
}

#[test]
fn single_page_of_results_has_no_strip() {
    let (_, body) = get_html("/en-US/search?q=crash&product=firefox");
    assert!(body.contains("Found <strong>5</strong> results for <strong>crash</strong> for <strong>Firefox</strong>"));
    assert!(body.contains("<input type=\"hidden\" name=\"product\" value=\"firefox\"/>"));
    assert!(!body.contains("class=\"pagination\""));
}

#[test]
fn search_form_without_query() {
    let (resp, body) = get_html("/search");
    assert_eq!(resp.code.as_u16(), 200);
    assert!(body.contains("<form id=\"search\" action=\"/search\" method=\"get\">"));
    assert!(!body.contains("results-header"));
}

#[test]
fn query_text_is_escaped() {
    let (_, body) = get_html("/en-US/search?q=%3Cscript%3Ealert(1)%3C%2Fscript%3E");
    assert!(body.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(!body.contains("<script>"));
}

#[test]
fn locale_path_selects_language() {
    let (_, body) = get_html("/de/search?q=qwertyuiop");
    assert!(body.contains("<html lang=\"de\">"));
    assert!(body.contains("in Deutsch."));
    assert!(body.contains("href=\"/de/kb/erste-schritte-firefox\""));
}
