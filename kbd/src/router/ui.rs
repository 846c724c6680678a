use anyhow::Result;

use kb_api::status::StatusCode;
use kb_render::{escape_html, render_page, Localizer};

use crate::proto::http_like::{Request, Response};
use crate::query::SearchParams;
use crate::services;

use super::search_utils::run_search;
use super::util::html_response;

/// Server-rendered results page. Without a query only the search form is shown.
pub fn render_search_page(req: &Request, locale: &str, path: &str) -> Result<Response> {
    let params = SearchParams::from_query_string(req.query().unwrap_or(""));
    let l10n = services::localizer();

    if params.q.is_empty() {
        let shell = page_shell(locale, path, &params, "");
        return Ok(html_response(StatusCode::Ok, shell.into_bytes()));
    }

    let outcome = run_search(&params, locale, path)?;
    let content = render_page(&outcome.set, &outcome.state, &outcome.window, l10n);
    let shell = page_shell(&outcome.locale, path, &params, &content);
    Ok(html_response(StatusCode::Ok, shell.into_bytes()))
}

fn page_shell(locale: &str, path: &str, params: &SearchParams, content: &str) -> String {
    let l10n = services::localizer();
    let q = escape_html(&params.q);
    let title = if params.q.is_empty() {
        escape_html(&l10n.localize("search.placeholder", &[], None))
    } else {
        escape_html(&l10n.localize("search.title", &[("q", params.q.as_str())], None))
    };
    let placeholder = escape_html(&l10n.localize("search.placeholder", &[], None));
    let submit = escape_html(&l10n.localize("search.submit", &[], None));
    let product = params
        .product
        .as_deref()
        .map(|p| format!("<input type=\"hidden\" name=\"product\" value=\"{}\"/>", escape_html(p)))
        .unwrap_or_default();
    let lang = escape_html(locale);
    let action = escape_html(path);
    format!(
        "<!DOCTYPE html>
<html lang=\"{lang}\">
<head><meta charset=\"utf-8\"/><title>{title}</title></head>
<body>
  <main class=\"search-results\">
    <form id=\"search\" action=\"{action}\" method=\"get\">
      <input name=\"q\" type=\"search\" value=\"{q}\" placeholder=\"{placeholder}\" autocomplete=\"off\"/>{product}
      <button type=\"submit\">{submit}</button>
    </form>
    {content}
  </main>
</body>
</html>
"
    )
}
