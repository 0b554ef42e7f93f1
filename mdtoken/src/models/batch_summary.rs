// src/models/batch_summary.rs
use std::path::PathBuf;

use crate::error::MetadataError;
use crate::models::SkipReason;

#[derive(Debug)]
pub enum OutcomeKind {
    /// The file was overwritten; holds the lines that went in.
    Rewritten { rendered: Vec<String> },
    /// Dry run: the file would have been overwritten with these lines.
    Planned { rendered: Vec<String> },
    Skipped(SkipReason),
    Failed(MetadataError),
}

/// What happened to one document during a pass.
#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub kind: OutcomeKind,
}

impl FileOutcome {
    #[inline]
    #[must_use]
    pub const fn new(path: PathBuf, kind: OutcomeKind) -> Self {
        Self { path, kind }
    }
}

/// Accumulated result of one directory pass.
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub outcomes: Vec<FileOutcome>,
    pub modified: u64,
    pub planned: u64,
    pub skipped: u64,
    pub failed: u64,
}

impl BatchSummary {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            outcomes: Vec::new(),
            modified: 0,
            planned: 0,
            skipped: 0,
            failed: 0,
        }
    }

    pub fn record(&mut self, outcome: FileOutcome) {
        let counter = match outcome.kind {
            OutcomeKind::Rewritten { .. } => &mut self.modified,
            OutcomeKind::Planned { .. } => &mut self.planned,
            OutcomeKind::Skipped(_) => &mut self.skipped,
            OutcomeKind::Failed(_) => &mut self.failed,
        };
        *counter = counter.saturating_add(1);
        self.outcomes.push(outcome);
    }

    #[inline]
    #[must_use]
    pub fn total_files(&self) -> usize {
        self.outcomes.len()
    }
}
