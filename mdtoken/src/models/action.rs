// src/models/action.rs
use clap::ValueEnum;
use std::fmt;

/// What to do with the target key in every selected document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Action {
    /// Replace the value of a key that is present and populated.
    Update,
    /// Fill in a key that is present but has no value.
    FindEmpty,
    /// Insert a key that is not present at all.
    FindMissing,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Update => "update",
            Self::FindEmpty => "find-empty",
            Self::FindMissing => "find-missing",
        };
        f.write_str(name)
    }
}

/// Topic category selecting which vocabulary list validates the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TopicCategory {
    #[default]
    Reference,
    Conceptual,
}

impl fmt::Display for TopicCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reference => f.write_str("reference"),
            Self::Conceptual => f.write_str("conceptual"),
        }
    }
}
