use anyhow::Result;

use kb_api::response::SearchResponse;
use kb_api::status::StatusCode;
use kb_render::compute_window;

use crate::proto::http_like::{Request, Response};
use crate::query::SearchParams;
use crate::services;

use super::search_utils::run_search;
use super::util::{json_response, request_locale};

pub fn handle_search(req: &Request) -> Result<Response> {
    let params = SearchParams::from_query_string(req.query().unwrap_or(""));
    if params.q.is_empty() {
        return Ok(Response::empty(StatusCode::BadRequest));
    }
    let locale = request_locale(req, &services::config().default_locale);
    let path = format!("/{locale}/search");
    let outcome = run_search(&params, &locale, &path)?;

    let pagination = compute_window(&outcome.state, &outcome.window);
    let resp = SearchResponse {
        query: outcome.set.query,
        product: outcome.set.product_label,
        language: outcome.set.language,
        total: outcome.set.count,
        page: outcome.state.current_page,
        total_pages: outcome.state.total_pages,
        results: outcome.set.items,
        fallback_results: outcome.set.fallback_results,
        pagination,
    };
    let body = serde_json::to_vec(&resp)?;
    Ok(json_response(StatusCode::Ok, body))
}
