// src/core/vocabulary.rs
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{MetadataError, Result};
use crate::models::TopicCategory;

/// Valid token names for one topic category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VocabularyList {
    tokens: BTreeSet<String>,
}

impl VocabularyList {
    /// Parses a newline-separated list. Blank lines and `#` comments are ignored.
    #[must_use]
    pub fn parse(content: &str) -> Self {
        Self {
            tokens: content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .map(str::to_owned)
                .collect(),
        }
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.tokens.contains(key)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Both vocabulary lists, loaded once per run.
#[derive(Debug, Clone, Default)]
pub struct Vocabularies {
    reference: VocabularyList,
    conceptual: VocabularyList,
}

impl Vocabularies {
    #[must_use]
    pub const fn new(reference: VocabularyList, conceptual: VocabularyList) -> Self {
        Self {
            reference,
            conceptual,
        }
    }

    /// Reads both lists. Either one missing ends the run.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError::VocabularyMissing`] naming the list that could
    /// not be read.
    pub fn load(reference: &Path, conceptual: &Path) -> Result<Self> {
        Ok(Self::new(
            read_list(TopicCategory::Reference, reference)?,
            read_list(TopicCategory::Conceptual, conceptual)?,
        ))
    }

    #[inline]
    #[must_use]
    pub const fn get(&self, category: TopicCategory) -> &VocabularyList {
        match category {
            TopicCategory::Reference => &self.reference,
            TopicCategory::Conceptual => &self.conceptual,
        }
    }

    /// # Errors
    ///
    /// Returns [`MetadataError::UnknownKey`] when `key` is not in the list for
    /// `category`.
    pub fn ensure_known(&self, category: TopicCategory, key: &str) -> Result<()> {
        if self.get(category).contains(key) {
            Ok(())
        } else {
            Err(MetadataError::UnknownKey {
                key: key.to_owned(),
                category,
            })
        }
    }
}

fn read_list(category: TopicCategory, path: &Path) -> Result<VocabularyList> {
    let content = fs::read_to_string(path).map_err(|source| MetadataError::VocabularyMissing {
        category,
        path: path.to_path_buf(),
        source,
    })?;
    let list = VocabularyList::parse(&content);
    debug!(%category, path = %path.display(), tokens = list.len(), "loaded vocabulary");
    Ok(list)
}
