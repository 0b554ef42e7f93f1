// src/utils.rs
use crate::models::{BatchSummary, FileOutcome, OutcomeKind};

/// One human-readable line for a processed file.
#[must_use]
pub fn describe_outcome(outcome: &FileOutcome) -> String {
    let name = outcome
        .path
        .file_name()
        .map_or_else(
            || outcome.path.display().to_string(),
            |n| n.to_string_lossy().into_owned(),
        );

    match &outcome.kind {
        OutcomeKind::Rewritten { rendered } => format!("{name}: wrote {}", rendered.join(" | ")),
        OutcomeKind::Planned { rendered } => {
            format!("{name}: would write {}", rendered.join(" | "))
        }
        OutcomeKind::Skipped(reason) => format!("{name}: skipped, {reason}"),
        OutcomeKind::Failed(err) => format!("{name}: failed, {err}"),
    }
}

pub fn print_summary(summary: &BatchSummary, dry_run: bool) {
    for outcome in &summary.outcomes {
        println!("{}", describe_outcome(outcome));
    }
    if dry_run {
        println!("Files that would be modified: {}", summary.planned);
    } else {
        println!("Files modified: {}", summary.modified);
    }
}
