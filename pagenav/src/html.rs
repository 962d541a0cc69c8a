//! Bootstrap markup for the pagination strip.
//!
//! Thin adapter over the abstract link sequence; all windowing logic lives
//! in the strip module.

use crate::{LinkKind, PageLink};

/// Renders the whole strip as a `<ul class="pagination">`.
pub fn render_strip(links: &[PageLink]) -> String {
    let items: String = links.iter().map(render_link).collect();
    format!("<ul class=\"pagination\">{items}</ul>")
}

/// Renders one `<li class="page-item">` entry.
pub fn render_link(link: &PageLink) -> String {
    match link.kind {
        LinkKind::Previous => arrow_item(link, "Previous", "«"),
        LinkKind::Next => arrow_item(link, "Next", "»"),
        LinkKind::Page => {
            let active = if link.is_current { " active" } else { "" };
            format!(
                "<li class=\"page-item{active}\" aria-current=\"page\">\
                 <a class=\"page-link\" href=\"{href}\">{page}</a></li>",
                href = escape_attr(link.href.as_deref().unwrap_or("#")),
                page = link.page_number.unwrap_or_default(),
            )
        }
        LinkKind::Ellipsis => {
            "<li class=\"page-item\"><a class=\"page-link\">⋯</a></li>".to_string()
        }
    }
}

fn arrow_item(link: &PageLink, label: &str, glyph: &str) -> String {
    let disabled = if link.is_disabled { " disabled" } else { "" };
    format!(
        "<li class=\"page-item{disabled}\">\
         <a class=\"page-link\" href=\"{href}\" aria-label=\"{label}\">\
         <span aria-hidden=\"true\">{glyph}</span></a></li>",
        href = escape_attr(link.href.as_deref().unwrap_or("#")),
    )
}

fn escape_attr(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use url::Url;

    use super::*;
    use crate::PaginationState;

    #[test]
    fn single_page_strip_markup() {
        let base = Url::parse("https://example.com/days/").unwrap();
        let links = PaginationState::new(1, 1).unwrap().links(&base);
        let markup = render_strip(&links);

        assert!(markup.starts_with("<ul class=\"pagination\">"));
        assert!(markup.contains("aria-label=\"Previous\""));
        assert!(markup.contains("aria-label=\"Next\""));
        assert!(markup.contains("page-item active"));
        assert_eq!(markup.matches("disabled").count(), 2);
    }
}
