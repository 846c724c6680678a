use kb_api::status::StatusCode;
use kb_render::canonical_locale;

use crate::proto::http_like::{Request, Response};

pub fn json_response(code: StatusCode, body: Vec<u8>) -> Response {
    Response { code, headers: vec![("content-type".into(), "application/json".into())], body }
}

pub fn html_response(code: StatusCode, body: Vec<u8>) -> Response {
    Response { code, headers: vec![("content-type".into(), "text/html; charset=utf-8".into())], body }
}

/// First supported locale named in `accept-language`, else the configured default.
pub fn request_locale(req: &Request, default_locale: &str) -> String {
    req.header("accept-language")
        .and_then(locale_from_accept_language)
        .unwrap_or(default_locale)
        .to_string()
}

fn locale_from_accept_language(value: &str) -> Option<&'static str> {
    value
        .split(',')
        .map(|part| part.split(';').next().unwrap_or("").trim())
        .filter(|tag| !tag.is_empty() && *tag != "*")
        .find_map(|tag| {
            canonical_locale(tag).or_else(|| tag.split('-').next().and_then(canonical_locale))
        })
}

/// `/{locale}/search` -> canonical locale code.
pub fn locale_search_route(route: &str) -> Option<&'static str> {
    let rest = route.strip_prefix('/')?;
    let (locale, tail) = rest.split_once('/')?;
    if tail != "search" {
        return None;
    }
    canonical_locale(locale)
}
