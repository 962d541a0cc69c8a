mod errors;
mod form;
mod html;
mod labels;
mod query;
mod refresh;
mod strip;

pub use self::errors::Error;
pub use self::form::{submit_enabled, suppresses_submit, FormSnapshot};
pub use self::html::{render_link, render_strip};
pub use self::labels::{weekday_abbrev, weekday_abbrev_from_index};
pub use self::query::{set_page, toggle_sort, Sorting};
pub use self::refresh::RefreshClient;
pub use self::strip::{LinkKind, PageLink, PaginationState};
