//! Form dirty-state tracking and the submit-key policy.

use url::form_urlencoded;

/// An ordered snapshot of a form's fields.
///
/// Two snapshots are compared through their urlencoded serialization, the
/// same representation a browser would submit. A baseline is taken when the
/// form loads; the submit control is enabled only once the live snapshot
/// diverges from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    fields: Vec<(String, String)>,
}

impl FormSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn push(&mut self, name: &str, value: &str) {
        self.fields.push((name.to_string(), value.to_string()));
    }

    /// The urlencoded form body, field order preserved.
    pub fn serialize(&self) -> String {
        let mut out = form_urlencoded::Serializer::new(String::new());
        for (name, value) in &self.fields {
            out.append_pair(name, value);
        }
        out.finish()
    }

    /// True when this snapshot no longer matches the stored baseline.
    pub fn is_dirty(&self, baseline: &FormSnapshot) -> bool {
        self.serialize() != baseline.serialize()
    }
}

/// Submit-control state: enabled only for a dirty form.
pub fn submit_enabled(current: &FormSnapshot, baseline: &FormSnapshot) -> bool {
    current.is_dirty(baseline)
}

/// Whether a keypress should be stopped from submitting the form.
pub fn suppresses_submit(key: &str) -> bool {
    key == "Enter"
}
