use std::path::PathBuf;

use kb_render::canonical_locale;

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: String,
    /// JSON document catalog; the built-in sample is used when unset.
    pub catalog_path: Option<PathBuf>,
    pub default_locale: String,
    pub per_page: u32, // 10
    pub page_radius: u32, // 2
    pub fallback_limit: usize, // 5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:8080".to_string(),
            catalog_path: None,
            default_locale: "en-US".to_string(),
            per_page: 10,
            page_radius: 2,
            fallback_limit: 5,
        }
    }
}

impl Config {
    /// - KB_ADDR (default 127.0.0.1:8080)
    /// - KB_CATALOG (optional path to a JSON catalog)
    /// - KB_DEFAULT_LOCALE (default en-US; unknown locales are ignored)
    /// - KB_PER_PAGE (default 10, min 1)
    /// - KB_PAGE_RADIUS (default 2)
    /// - KB_FALLBACK_LIMIT (default 5)
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Some(addr) = env_string("KB_ADDR") {
            cfg.addr = addr;
        }
        cfg.catalog_path = env_string("KB_CATALOG").map(PathBuf::from);
        if let Some(locale) = env_string("KB_DEFAULT_LOCALE").as_deref().and_then(canonical_locale) {
            cfg.default_locale = locale.to_string();
        }
        cfg.per_page = env_parse("KB_PER_PAGE", cfg.per_page).max(1);
        cfg.page_radius = env_parse("KB_PAGE_RADIUS", cfg.page_radius);
        cfg.fallback_limit = env_parse("KB_FALLBACK_LIMIT", cfg.fallback_limit);
        cfg
    }
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn env_parse<T: std::str::FromStr>(key: &str, default_val: T) -> T {
    env_string(key)
        .and_then(|s| s.parse::<T>().ok())
        .unwrap_or(default_val)
}
