use url::form_urlencoded;

pub const PAGE_PARAM: &str = "page";

/// Return `base_url` with its `page` query parameter set to `page`.
///
/// Any existing `page` pair is dropped, other pairs keep their order and a
/// trailing `#fragment` is preserved. Works on relative URLs.
pub fn with_page(base_url: &str, page: u32) -> String {
    let (rest, fragment) = match base_url.split_once('#') {
        Some((r, f)) => (r, Some(f)),
        None => (base_url, None),
    };
    let (path, query) = rest.split_once('?').unwrap_or((rest, ""));

    let mut ser = form_urlencoded::Serializer::new(String::new());
    for (k, v) in form_urlencoded::parse(query.as_bytes()) {
        if k != PAGE_PARAM {
            ser.append_pair(&k, &v);
        }
    }
    ser.append_pair(PAGE_PARAM, &page.to_string());

    let mut out = format!("{path}?{}", ser.finish());
    if let Some(f) = fragment {
        out.push('#');
        out.push_str(f);
    }
    out
}
