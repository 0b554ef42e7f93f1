// src/core/line.rs

/// A raw front-matter line split at its first colon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyValueLine<'a> {
    pub key: &'a str,
    /// Untrimmed text after the colon, empty when there is no colon.
    pub value: &'a str,
    pub has_colon: bool,
}

impl<'a> KeyValueLine<'a> {
    /// Splits at the first `:`. Without a colon the whole line is the key.
    #[inline]
    #[must_use]
    pub fn parse(line: &'a str) -> Self {
        line.split_once(':').map_or(
            Self {
                key: line,
                value: "",
                has_colon: false,
            },
            |(key, value)| Self {
                key,
                value,
                has_colon: true,
            },
        )
    }

    #[inline]
    #[must_use]
    pub fn is_populated(&self) -> bool {
        !self.value.trim().is_empty()
    }
}
