// src/core/builder.rs
use std::collections::BTreeSet;

/// Keys whose values are written as a block list rather than a scalar.
pub const DEFAULT_LIST_KEYS: [&str; 5] =
    ["topic_type", "api_type", "api_location", "api_name", "product"];

/// The table of list-valued keys handed to the line builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListKeys {
    keys: BTreeSet<String>,
}

impl ListKeys {
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }
}

impl Default for ListKeys {
    fn default() -> Self {
        Self::new(DEFAULT_LIST_KEYS)
    }
}

/// Renders `key` and a comma-separated `value` into front-matter lines.
///
/// List-valued keys become `key:` followed by one `- segment` line per comma
/// segment. Segments keep their surrounding whitespace. Every other key is a
/// single `key: value` line.
#[must_use]
pub fn render_lines(key: &str, value: &str, list_keys: &ListKeys) -> Vec<String> {
    if list_keys.contains(key) {
        std::iter::once(format!("{key}:"))
            .chain(value.split(',').map(|segment| format!("- {segment}")))
            .collect()
    } else {
        vec![format!("{key}: {value}")]
    }
}
