// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

use crate::models::TopicCategory;

/// Errors raised while configuring or running a metadata pass.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// A vocabulary list could not be read. Ends the current run.
    #[error(
        "cannot read the {category} token list at {}: {source}; fix the list and run again",
        .path.display()
    )]
    VocabularyMissing {
        category: TopicCategory,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The requested key is not part of the chosen vocabulary.
    #[error("'{key}' is not a valid {category} token")]
    UnknownKey { key: String, category: TopicCategory },

    /// A fixed value was blank.
    #[error("no value given for '{key}'")]
    EmptyValue { key: String },

    /// A document could not be read or written.
    #[error("cannot open {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("invalid config file {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value map {}: {source}", .path.display())]
    ValueMap {
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },

    #[error("invalid exclude pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

impl MetadataError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, MetadataError>;
