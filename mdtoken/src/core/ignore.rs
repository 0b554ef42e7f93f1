// src/core/ignore.rs
use glob::Pattern;

use crate::error::{MetadataError, Result};

pub mod loader;

pub use loader::{IGNORE_FILE, find_upward, load_exclusions};

/// File names that are never processed, whatever the patterns say.
pub const ALWAYS_EXCLUDED: [&str; 2] = ["index.md", "TOC.md"];

#[derive(Debug, Default)]
pub struct Exclusions {
    /// Each entry is the compiled file-name glob and whether it is a
    /// `!negation`. Entries keep the order they were added in.
    patterns: Vec<(Pattern, bool)>,
}

impl Exclusions {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// Adds one glob matched against bare file names.
    ///
    /// Blank lines and `#` comments are ignored, and a leading `!` turns the
    /// pattern into a negation.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError::Pattern`] if the glob syntax is invalid.
    pub fn add_pattern(&mut self, pattern: &str) -> Result<()> {
        let pattern = pattern.trim();
        if pattern.is_empty() || pattern.starts_with('#') {
            return Ok(());
        }

        let (glob, is_negation) = pattern
            .strip_prefix('!')
            .map_or((pattern, false), |stripped| (stripped, true));

        let compiled = Pattern::new(glob).map_err(|source| MetadataError::Pattern {
            pattern: pattern.to_owned(),
            source,
        })?;
        self.patterns.push((compiled, is_negation));
        Ok(())
    }

    /// Whether `file_name` is left out of a pass.
    ///
    /// The last pattern that matches decides, as in `.gitignore`: a
    /// `!negation` re-includes names matched by earlier patterns and is
    /// itself overridden by later ones.
    #[must_use]
    pub fn is_excluded(&self, file_name: &str) -> bool {
        if ALWAYS_EXCLUDED.contains(&file_name) {
            return true;
        }

        self.patterns
            .iter()
            .rev()
            .find(|(pattern, _)| pattern.matches(file_name))
            .is_some_and(|(_, is_neg)| !is_neg)
    }
}
