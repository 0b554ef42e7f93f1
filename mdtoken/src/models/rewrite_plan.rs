// src/models/rewrite_plan.rs
use std::fmt;

/// Why a document is left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The key does not appear in the front matter.
    KeyAbsent,
    /// The key is there but has nothing to update.
    NoValueToUpdate,
    /// The key already carries a value.
    AlreadyPopulated { existing: String },
    /// The key is present, so there is nothing to insert.
    AlreadyPresent { existing: String },
    /// No closing `---` to insert before.
    Unterminated,
    /// The value supplier had nothing for this file.
    NoValueSupplied,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KeyAbsent => f.write_str("token not found"),
            Self::NoValueToUpdate => f.write_str("token has no value to update"),
            Self::AlreadyPopulated { existing } => {
                write!(f, "token already has a value: {existing}")
            }
            Self::AlreadyPresent { existing } if existing.is_empty() => {
                f.write_str("token found with an empty value")
            }
            Self::AlreadyPresent { existing } => write!(f, "token found with value: {existing}"),
            Self::Unterminated => f.write_str("front matter is not terminated"),
            Self::NoValueSupplied => f.write_str("no value supplied"),
        }
    }
}

/// Where the rendered lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanAction {
    /// Drop the line at the index and put the rendered lines in its place.
    ReplaceAt(usize),
    /// Put the rendered lines before the line at the index.
    InsertBefore(usize),
    Skip(SkipReason),
}

impl PlanAction {
    #[inline]
    #[must_use]
    pub const fn is_skip(&self) -> bool {
        matches!(self, Self::Skip(_))
    }
}

/// A decided edit for one document, consumed once by the rewriter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewritePlan {
    pub action: PlanAction,
    pub rendered_lines: Vec<String>,
}

impl RewritePlan {
    #[inline]
    #[must_use]
    pub const fn new(action: PlanAction, rendered_lines: Vec<String>) -> Self {
        Self {
            action,
            rendered_lines,
        }
    }

    #[inline]
    #[must_use]
    pub const fn skip(reason: SkipReason) -> Self {
        Self {
            action: PlanAction::Skip(reason),
            rendered_lines: Vec::new(),
        }
    }
}
