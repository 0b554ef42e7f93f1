// src/models/scan_result.rs

/// Classification of one document against one target key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    pub found: bool,
    pub populated: bool,
    /// Line holding the key, when found.
    pub line_index: Option<usize>,
    /// Trimmed text after the first colon of the key line.
    pub existing_value: String,
    /// Line index of the closing `---`, when the scan reached it.
    pub block_end: Option<usize>,
}

impl ScanResult {
    #[inline]
    #[must_use]
    pub fn found(line_index: usize, existing_value: &str) -> Self {
        let existing_value = existing_value.trim().to_owned();
        Self {
            found: true,
            populated: !existing_value.is_empty(),
            line_index: Some(line_index),
            existing_value,
            block_end: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn missing(block_end: Option<usize>) -> Self {
        Self {
            found: false,
            populated: false,
            line_index: None,
            existing_value: String::new(),
            block_end,
        }
    }
}
