// src/core/values.rs
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{MetadataError, Result};

/// Supplies the value to write into a given file.
pub trait ValueSource {
    /// The raw value for `file_name`, or `None` to leave the file alone.
    fn value_for(&self, file_name: &str) -> Option<String>;
}

/// The same value for every file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedValue(pub String);

impl ValueSource for FixedValue {
    fn value_for(&self, _file_name: &str) -> Option<String> {
        Some(self.0.clone())
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawValue {
    One(String),
    Many(Vec<String>),
}

/// Per-file values read from a YAML mapping of file name to value.
///
/// ```yaml
/// overview.md: jdoe
/// api.md: [Contoso.Widget, Contoso.Gadget]
/// ```
///
/// Sequences are joined with `,` so list-valued keys render one item each.
/// Entries that are blank after trimming are dropped, so their files are
/// skipped as having no value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueMap {
    values: BTreeMap<String, String>,
}

impl ValueMap {
    /// # Errors
    ///
    /// Returns [`MetadataError::ValueMap`] if `content` is not a mapping of
    /// strings to strings or string lists.
    pub fn parse(content: &str, origin: &Path) -> Result<Self> {
        let raw: BTreeMap<String, RawValue> =
            serde_yaml_ng::from_str(content).map_err(|source| MetadataError::ValueMap {
                path: origin.to_path_buf(),
                source,
            })?;

        let values = raw
            .into_iter()
            .filter_map(|(file, value)| {
                let joined = match value {
                    RawValue::One(v) => v,
                    RawValue::Many(items) => items.join(","),
                };
                if joined.trim().is_empty() {
                    debug!(file = %file, "ignoring blank value");
                    return None;
                }
                Some((file, joined))
            })
            .collect();
        Ok(Self { values })
    }

    /// # Errors
    ///
    /// Returns [`MetadataError::Io`] if the file cannot be read and
    /// [`MetadataError::ValueMap`] if it cannot be parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| MetadataError::io(path, e))?;
        Self::parse(&content, path)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl ValueSource for ValueMap {
    fn value_for(&self, file_name: &str) -> Option<String> {
        self.values.get(file_name).cloned()
    }
}
