// src/models.rs
mod action;
mod batch_summary;
mod document;
mod rewrite_plan;
mod scan_result;

pub use action::{Action, TopicCategory};
pub use batch_summary::{BatchSummary, FileOutcome, OutcomeKind};
pub use document::{Document, LineEnding};
pub use rewrite_plan::{PlanAction, RewritePlan, SkipReason};
pub use scan_result::ScanResult;
