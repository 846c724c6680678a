use kb_api::{PageRangeEntry, PaginationState};
use kb_query::with_page;

use crate::escape::escape_html;
use crate::l10n::Localizer;

/// Build the pagination strip for `state` around the caller-chosen `visible`
/// page numbers (ascending).
///
/// Returns nothing when there is a single page; callers skip the footer in
/// that case. Page 1 and the last page are always present, with an ellipsis
/// only when the window is not directly adjacent to them. An empty window is
/// treated as `[current_page]`.
pub fn compute_window(state: &PaginationState, visible: &[u32]) -> Vec<PageRangeEntry> {
    if state.total_pages <= 1 {
        return Vec::new();
    }
    debug_assert!(state.validate().is_ok(), "invalid pagination state: {state:?}");
    debug_assert!(
        visible.windows(2).all(|w| w[0] < w[1]),
        "visible pages must be ascending: {visible:?}"
    );

    let current = state.current_page;
    let total = state.total_pages;
    let only_current = [current];
    let window = if visible.is_empty() { &only_current[..] } else { visible };
    let first = window[0];
    let last = window[window.len() - 1];

    let page = |number: u32| PageRangeEntry::Page {
        number,
        href: with_page(&state.base_url, number),
        selected: number == current,
    };

    let mut entries = Vec::with_capacity(window.len() + 6);
    if state.has_previous {
        let prev = current.saturating_sub(1).max(1);
        entries.push(PageRangeEntry::Prev { page: prev, href: with_page(&state.base_url, prev) });
    }
    if first != 1 {
        entries.push(page(1));
        if first != 2 {
            entries.push(PageRangeEntry::Ellipsis);
        }
    }
    entries.extend(window.iter().map(|&x| page(x)));
    if last != total {
        if last != total - 1 {
            entries.push(PageRangeEntry::Ellipsis);
        }
        entries.push(page(total));
    }
    if state.has_next {
        let next = current.saturating_add(1).min(total);
        entries.push(PageRangeEntry::Next { page: next, href: with_page(&state.base_url, next) });
    }
    entries
}

/// Pages within `radius` of `current`, clipped to `1..=total`.
pub fn visible_window(current: u32, total: u32, radius: u32) -> Vec<u32> {
    if total == 0 {
        return Vec::new();
    }
    let current = current.clamp(1, total);
    let lo = current.saturating_sub(radius).max(1);
    let hi = current.saturating_add(radius).min(total);
    (lo..=hi).collect()
}

pub fn render_pagination(entries: &[PageRangeEntry], l10n: &dyn Localizer) -> String {
    if entries.is_empty() {
        return String::new();
    }
    let label = escape_html(&l10n.localize("pagination.label", &[], None));
    let mut out = format!("<ol class=\"pagination\" aria-label=\"{label}\">");
    for entry in entries {
        match entry {
            PageRangeEntry::Prev { href, .. } => out.push_str(&format!(
                "<li class=\"prev\"><a href=\"{}\" rel=\"prev\">{}</a></li>",
                escape_html(href),
                escape_html(&l10n.localize("pagination.prev", &[], None)),
            )),
            PageRangeEntry::Page { number, href, selected: true } => out.push_str(&format!(
                "<li class=\"selected\"><a href=\"{}\" aria-current=\"page\">{number}</a></li>",
                escape_html(href),
            )),
            PageRangeEntry::Page { number, href, .. } => out.push_str(&format!(
                "<li><a href=\"{}\">{number}</a></li>",
                escape_html(href),
            )),
            PageRangeEntry::Ellipsis => out.push_str("<li class=\"skip\">…</li>"),
            PageRangeEntry::Next { href, .. } => out.push_str(&format!(
                "<li class=\"next\"><a href=\"{}\" rel=\"next\">{}</a></li>",
                escape_html(href),
                escape_html(&l10n.localize("pagination.next", &[], None)),
            )),
        }
    }
    out.push_str("</ol>");
    out
}
