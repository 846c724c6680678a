use kb_api::{PaginationState, SearchResultSet};

use crate::l10n::Localizer;
use crate::pagination::{compute_window, render_pagination};
use crate::presenter::present;

/// Results body followed by the pagination strip (omitted for a single page).
pub fn render_page(
    set: &SearchResultSet,
    state: &PaginationState,
    visible: &[u32],
    l10n: &dyn Localizer,
) -> String {
    let body = present(set, l10n);
    let mut out = body.to_html();
    if state.total_pages > 1 {
        let entries = compute_window(state, visible);
        out.push_str(&render_pagination(&entries, l10n));
    }
    tracing::debug!(
        "[render] page={}/{} blocks={} fallback={} bytes={}",
        state.current_page,
        state.total_pages,
        body.blocks.len(),
        body.fallback,
        out.len()
    );
    out
}
