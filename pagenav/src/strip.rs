//! Pagination strip rendering.
//!
//! Computes the abstract link sequence for a truncated page-number control:
//! a previous arrow, a window of numbered pages abbreviated with ellipses,
//! and a next arrow. The sequence is plain data; materializing it into
//! markup is the job of [`crate::render_strip`] or a host rendering layer.

use serde::Serialize;
use url::Url;

use crate::{query, Error};

/// Strips with fewer pages than this show every page number, no ellipsis.
const FULL_STRIP_BELOW: u32 = 7;
/// Width of the head/tail region that keeps the window anchored to an edge.
const EDGE_WINDOW: u32 = 3;

/// The role of a single entry in the pagination strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Previous,
    Next,
    Page,
    Ellipsis,
}

/// One entry of the rendered strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLink {
    pub kind: LinkKind,
    /// Set iff `kind` is [`LinkKind::Page`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,
    pub is_current: bool,
    pub is_disabled: bool,
    /// Absent on ellipsis entries, which are not navigable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// A validated pagination position: `1 <= current_page <= total_pages`.
///
/// The constructor is the only way to obtain a value, so [`links`] never has
/// to deal with out-of-range positions.
///
/// [`links`]: PaginationState::links
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationState {
    current_page: u32,
    total_pages: u32,
}

impl PaginationState {
    /// Validates and builds a pagination position.
    pub fn new(current_page: u32, total_pages: u32) -> Result<Self, Error> {
        if current_page < 1 || total_pages < 1 || current_page > total_pages {
            return Err(Error::PageOutOfRange {
                current: current_page,
                total: total_pages,
            });
        }
        Ok(Self {
            current_page,
            total_pages,
        })
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn on_first_page(&self) -> bool {
        self.current_page == 1
    }

    pub fn on_last_page(&self) -> bool {
        self.current_page == self.total_pages
    }

    /// Renders the full link sequence for this position.
    ///
    /// Every link's href is `base` with only its `page` query parameter
    /// overridden; the rest of the query string is preserved. The sequence
    /// always starts with a previous arrow and ends with a next arrow, both
    /// emitted even when disabled so the control keeps a stable width.
    pub fn links(&self, base: &Url) -> Vec<PageLink> {
        let (current, total) = (self.current_page, self.total_pages);
        let mut links = Vec::new();
        links.push(self.previous_link(base));

        if total < FULL_STRIP_BELOW {
            // << 1 2 .. total >>
            for page in 1..=total {
                links.push(self.page_link(base, page));
            }
        } else if current <= EDGE_WINDOW {
            // << 1 .. current+1 ... total >>
            for page in 1..=current + 1 {
                links.push(self.page_link(base, page));
            }
            links.push(Self::ellipsis());
            links.push(self.page_link(base, total));
        } else if current <= total - EDGE_WINDOW {
            // << 1 ... current-1 current current+1 ... total >>
            links.push(self.page_link(base, 1));
            links.push(Self::ellipsis());
            for page in current - 1..=current + 1 {
                links.push(self.page_link(base, page));
            }
            links.push(Self::ellipsis());
            links.push(self.page_link(base, total));
        } else {
            // << 1 ... current-1 .. total >>
            links.push(self.page_link(base, 1));
            links.push(Self::ellipsis());
            for page in current - 1..=total {
                links.push(self.page_link(base, page));
            }
        }

        links.push(self.next_link(base));
        links
    }

    fn previous_link(&self, base: &Url) -> PageLink {
        // The source material pointed a disabled arrow at page 0; clamp to
        // the valid range instead.
        let target = self.current_page.saturating_sub(1).max(1);
        PageLink {
            kind: LinkKind::Previous,
            page_number: None,
            is_current: false,
            is_disabled: self.on_first_page(),
            href: Some(query::set_page(base, target).to_string()),
        }
    }

    fn next_link(&self, base: &Url) -> PageLink {
        let target = (self.current_page + 1).min(self.total_pages);
        PageLink {
            kind: LinkKind::Next,
            page_number: None,
            is_current: false,
            is_disabled: self.on_last_page(),
            href: Some(query::set_page(base, target).to_string()),
        }
    }

    fn page_link(&self, base: &Url, page: u32) -> PageLink {
        PageLink {
            kind: LinkKind::Page,
            page_number: Some(page),
            is_current: page == self.current_page,
            is_disabled: false,
            href: Some(query::set_page(base, page).to_string()),
        }
    }

    fn ellipsis() -> PageLink {
        PageLink {
            kind: LinkKind::Ellipsis,
            page_number: None,
            is_current: false,
            is_disabled: false,
            href: None,
        }
    }
}
