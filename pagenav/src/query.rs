//! Query-string helpers shared by the strip renderer and the sort toggles.

use std::str::FromStr;

use serde::Serialize;
use url::Url;

/// Replaces `name` in the URL's query string with a single `value`.
///
/// Every other parameter is preserved in order; existing occurrences of
/// `name` are dropped rather than duplicated.
fn set_param(url: &Url, name: &str, value: &str) -> Url {
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .filter(|(k, _)| k.as_str() != name)
        .collect();

    let mut out = url.clone();
    out.set_query(None);
    {
        let mut pairs = out.query_pairs_mut();
        for (k, v) in &kept {
            pairs.append_pair(k, v);
        }
        pairs.append_pair(name, value);
    }
    out
}

/// Overrides the `page` parameter of `base`, preserving all other parameters.
pub fn set_page(base: &Url, page: u32) -> Url {
    set_param(base, "page", &page.to_string())
}

/// Toggles the `sorting` parameter for a column `key` and returns the
/// updated URL. Applying the result is the caller's navigation side effect.
pub fn toggle_sort(url: &Url, key: &str) -> Url {
    let current = url
        .query_pairs()
        .find_map(|(k, v)| (k == "sorting").then(|| v.into_owned()));
    let next = Sorting::toggled(current.as_deref(), key);
    set_param(url, "sorting", &next.to_string())
}

/// A `sorting` query value: a column key with an optional descending marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sorting {
    pub field: String,
    pub descending: bool,
}

impl Sorting {
    /// Next value for `key` given the current parameter: an exact ascending
    /// match flips to descending, anything else (absent, `-key`, or another
    /// column) starts ascending.
    pub fn toggled(current: Option<&str>, key: &str) -> Self {
        Self {
            field: key.to_string(),
            descending: current == Some(key),
        }
    }
}

impl std::fmt::Display for Sorting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.descending {
            write!(f, "-{}", self.field)
        } else {
            write!(f, "{}", self.field)
        }
    }
}

impl FromStr for Sorting {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.strip_prefix('-') {
            Some(field) if !field.is_empty() => Ok(Self {
                field: field.to_string(),
                descending: true,
            }),
            None if !s.is_empty() => Ok(Self {
                field: s.to_string(),
                descending: false,
            }),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_page_replaces_without_duplicating() {
        let url = Url::parse("https://example.com/days/?sorting=-stage&page=2").unwrap();
        let updated = set_page(&url, 5);
        let query = updated.query().unwrap();
        assert_eq!(query.matches("page=").count(), 1);
        assert!(query.contains("page=5"));
        assert!(query.contains("sorting=-stage"));
    }

    #[test]
    fn set_page_keeps_parameter_order() {
        let url = Url::parse("https://example.com/days/?a=1&b=2").unwrap();
        let updated = set_page(&url, 3);
        assert_eq!(updated.query(), Some("a=1&b=2&page=3"));
    }

    #[test]
    fn toggle_sort_cycles_key_and_descending_key() {
        let url = Url::parse("https://example.com/days/").unwrap();

        let first = toggle_sort(&url, "stage");
        assert_eq!(first.query(), Some("sorting=stage"));

        let second = toggle_sort(&first, "stage");
        assert_eq!(second.query(), Some("sorting=-stage"));

        let third = toggle_sort(&second, "stage");
        assert_eq!(third.query(), Some("sorting=stage"));
    }

    #[test]
    fn toggle_sort_switching_columns_starts_ascending() {
        let url = Url::parse("https://example.com/days/?sorting=stage&page=4").unwrap();
        let updated = toggle_sort(&url, "study_time");
        let query = updated.query().unwrap();
        assert!(query.contains("sorting=study_time"));
        assert!(query.contains("page=4"));
    }

    #[test]
    fn sorting_round_trips_through_display() {
        let descending: Sorting = "-total".parse().unwrap();
        assert!(descending.descending);
        assert_eq!(descending.to_string(), "-total");

        let ascending: Sorting = "total".parse().unwrap();
        assert!(!ascending.descending);
        assert_eq!(ascending.to_string(), "total");

        assert!("".parse::<Sorting>().is_err());
        assert!("-".parse::<Sorting>().is_err());
    }
}
