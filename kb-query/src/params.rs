use thiserror::Error;
use url::form_urlencoded;

use kb_api::limits::truncate_query;

use crate::link::PAGE_PARAM;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParamsError {
    #[error("invalid page number: {0:?}")]
    InvalidPage(String),
}

/// Request parameters of a results page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    pub q: String,
    pub page: u32,
    pub product: Option<String>,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self { q: String::new(), page: 1, product: None }
    }
}

impl SearchParams {
    /// Lenient parse of `q=..&page=..&product=..`; a bad `page` becomes 1 and
    /// the query text is cut to the protocol limit.
    pub fn from_query_string(raw: &str) -> Self {
        let mut params = Self::default();
        for (k, v) in form_urlencoded::parse(raw.as_bytes()) {
            match &*k {
                "q" => params.q = truncate_query(v.trim()).to_string(),
                PAGE_PARAM => params.page = parse_page(&v).unwrap_or(1),
                "product" => {
                    let v = v.trim().to_ascii_lowercase();
                    params.product = if v.is_empty() { None } else { Some(v) };
                }
                _ => {}
            }
        }
        params
    }

    /// URL of this search without the page parameter.
    pub fn base_url(&self, path: &str) -> String {
        let mut ser = form_urlencoded::Serializer::new(String::new());
        ser.append_pair("q", &self.q);
        if let Some(product) = &self.product {
            ser.append_pair("product", product);
        }
        format!("{path}?{}", ser.finish())
    }
}

pub fn parse_page(raw: &str) -> Result<u32, ParamsError> {
    match raw.trim().parse::<u32>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(ParamsError::InvalidPage(raw.to_string())),
    }
}
