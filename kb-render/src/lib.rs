pub mod escape;
pub mod l10n;
pub mod page;
pub mod pagination;
pub mod presenter;

pub use escape::escape_html;
pub use l10n::{canonical_locale, language_name, Catalog, Localizer};
pub use page::render_page;
pub use pagination::{compute_window, render_pagination, visible_window};
pub use presenter::{present, RenderedBody};
