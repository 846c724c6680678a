use kb_api::{FallbackResult, MatchedResult, ResultItem, SearchResultSet};

use crate::escape::escape_html;
use crate::l10n::Localizer;

/// Header plus one markup block per result, before final assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedBody {
    pub header: String,
    pub blocks: Vec<String>,
    /// True when the blocks are suggestions rather than matches.
    pub fallback: bool,
}

impl RenderedBody {
    pub fn to_html(&self) -> String {
        let mut out = format!("<h2 class=\"results-header\">{}</h2>", self.header);
        let (open, close) = if self.fallback {
            ("<ul class=\"fallback-results\">", "</ul>")
        } else {
            ("<div class=\"results\">", "</div>")
        };
        out.push_str(open);
        for block in &self.blocks {
            out.push_str(block);
        }
        out.push_str(close);
        out
    }
}

pub fn present(set: &SearchResultSet, l10n: &dyn Localizer) -> RenderedBody {
    let q = escape_html(&set.query);
    if set.has_matches() {
        let n = set.count.to_string();
        let product = escape_html(&set.product_label);
        let header = l10n.localize(
            "search.results_header",
            &[("n", n.as_str()), ("q", q.as_str()), ("product", product.as_str())],
            Some(set.count),
        );
        RenderedBody {
            header,
            blocks: set.items.iter().map(render_item).collect(),
            fallback: false,
        }
    } else {
        let language = escape_html(&set.language);
        let header = l10n.localize(
            "search.no_results_header",
            &[("q", q.as_str()), ("language", language.as_str())],
            None,
        );
        RenderedBody {
            header,
            blocks: set.fallback_results.iter().map(render_item).collect(),
            fallback: true,
        }
    }
}

fn render_item(item: &ResultItem) -> String {
    match item {
        ResultItem::Matched(m) => render_matched(m),
        ResultItem::Fallback(f) => render_fallback(f),
    }
}

fn render_matched(m: &MatchedResult) -> String {
    format!(
        "<article class=\"result\"><h3><a href=\"{}\">{}</a></h3><div class=\"summary\">{}</div></article>",
        escape_html(&m.url),
        escape_html(&m.title),
        m.summary_html,
    )
}

// Title and summary both link to the article.
fn render_fallback(f: &FallbackResult) -> String {
    let url = escape_html(&f.url);
    format!(
        "<li class=\"fallback-result\"><a class=\"title\" href=\"{url}\">{}</a><a class=\"summary\" href=\"{url}\">{}</a></li>",
        escape_html(&f.title),
        escape_html(&f.summary_text),
    )
}
