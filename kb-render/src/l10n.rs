use std::collections::HashMap;

/// Message lookup injected into the renderers.
///
/// `params` are substituted into `{name}` placeholders. When `count` is given
/// the implementation picks the matching plural form.
pub trait Localizer {
    fn localize(&self, key: &str, params: &[(&str, &str)], count: Option<u64>) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralForm {
    One,
    Other,
}

pub type PluralRule = fn(u64) -> PluralForm;

pub fn english_plural(n: u64) -> PluralForm {
    if n == 1 {
        PluralForm::One
    } else {
        PluralForm::Other
    }
}

#[derive(Debug, Clone)]
struct Message {
    one: String,
    other: String,
}

/// In-memory message table with a single plural rule.
#[derive(Debug, Clone)]
pub struct Catalog {
    messages: HashMap<String, Message>,
    plural: PluralRule,
}

impl Catalog {
    pub fn new(plural: PluralRule) -> Self {
        Self { messages: HashMap::new(), plural }
    }

    pub fn insert(&mut self, key: &str, text: &str) -> &mut Self {
        self.insert_plural(key, text, text)
    }

    pub fn insert_plural(&mut self, key: &str, one: &str, other: &str) -> &mut Self {
        self.messages
            .insert(key.to_string(), Message { one: one.to_string(), other: other.to_string() });
        self
    }

    pub fn english() -> Self {
        let mut c = Self::new(english_plural);
        c.insert_plural(
            "search.results_header",
            "Found <strong>{n}</strong> result for <strong>{q}</strong> for <strong>{product}</strong>",
            "Found <strong>{n}</strong> results for <strong>{q}</strong> for <strong>{product}</strong>",
        )
        .insert(
            "search.no_results_header",
            "Sorry! 0 results found for <strong>{q}</strong> in {language}.",
        )
        .insert("search.fallback_intro", "Try one of these popular articles instead:")
        .insert("search.title", "Search results for {q}")
        .insert("search.placeholder", "Search Support")
        .insert("search.submit", "Search")
        .insert("search.all_products", "All Products")
        .insert("pagination.label", "Pagination")
        .insert("pagination.prev", "Previous")
        .insert("pagination.next", "Next");
        c
    }
}

impl Localizer for Catalog {
    fn localize(&self, key: &str, params: &[(&str, &str)], count: Option<u64>) -> String {
        let Some(msg) = self.messages.get(key) else {
            tracing::warn!("[l10n] missing message key={}", key);
            return key.to_string();
        };
        let template = match count.map(self.plural) {
            Some(PluralForm::One) => &msg.one,
            _ => &msg.other,
        };
        interpolate(template, params)
    }
}

fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let Some(end) = after.find('}') else {
            out.push_str(&rest[start..]);
            return out;
        };
        let name = &after[..end];
        match params.iter().find(|(k, _)| *k == name) {
            Some((_, v)) => out.push_str(v),
            None => out.push_str(&rest[start..start + end + 2]),
        }
        rest = &after[end + 1..];
    }
    out.push_str(rest);
    out
}

static LOCALES: &[(&str, &str)] = &[
    ("en-US", "English"),
    ("de", "Deutsch"),
    ("es", "Español"),
    ("fr", "Français"),
    ("it", "Italiano"),
    ("ja", "日本語"),
    ("nl", "Nederlands"),
    ("pl", "Polski"),
    ("pt-BR", "Português (do Brasil)"),
    ("ru", "Русский"),
    ("zh-CN", "中文 (简体)"),
];

/// Canonical spelling of a supported locale code, matched case-insensitively.
pub fn canonical_locale(code: &str) -> Option<&'static str> {
    LOCALES
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(code))
        .map(|(c, _)| *c)
}

/// Display name of a locale; unknown codes are returned unchanged.
pub fn language_name(code: &str) -> String {
    LOCALES
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(code))
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| code.to_string())
}
