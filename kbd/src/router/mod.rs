use anyhow::Result;

use crate::proto::http_like::{Request, Response};
use crate::services;
use kb_api::status::StatusCode;

mod api;
mod search_utils;
mod ui;
mod util;

pub fn handle(req: Request) -> Result<Response> {
    let resp = dispatch(&req)?;
    tracing::debug!("[router] {} {} -> {}", req.method, req.path, resp.code.as_u16());
    Ok(resp)
}

fn dispatch(req: &Request) -> Result<Response> {
    let default_locale = &services::config().default_locale;
    match (req.method.as_str(), req.route()) {
        ("GET", "/health/ready") => Ok(util::json_response(
            StatusCode::Ok,
            b"{\"status\":\"ready\"}".to_vec(),
        )),
        ("GET", "/") | ("GET", "/search") => {
            let locale = util::request_locale(req, default_locale);
            ui::render_search_page(req, &locale, "/search")
        }
        ("GET", "/api/search") => api::handle_search(req),
        ("GET", route) => match util::locale_search_route(route) {
            Some(locale) => ui::render_search_page(req, locale, &format!("/{locale}/search")),
            None => Ok(Response::empty(StatusCode::NotFound)),
        },
        _ => Ok(Response::empty(StatusCode::NotFound)),
    }
}
