// src/core/planner.rs
use crate::models::{Action, PlanAction, ScanResult, SkipReason};

/// Decides what to do with one document. This table is the whole policy:
///
/// | action       | found | populated | decision                 |
/// |--------------|-------|-----------|--------------------------|
/// | Update       | no    | -         | skip: absent             |
/// | Update       | yes   | no        | skip: nothing to update  |
/// | Update       | yes   | yes       | replace the key line     |
/// | FindEmpty    | no    | -         | skip: absent             |
/// | FindEmpty    | yes   | yes       | skip: already populated  |
/// | FindEmpty    | yes   | no        | replace the key line     |
/// | FindMissing  | yes   | any       | skip: present            |
/// | FindMissing  | no    | -         | insert before closing `---` |
#[must_use]
pub fn decide(action: Action, scan: &ScanResult) -> PlanAction {
    let existing = || scan.existing_value.clone();

    match (action, scan.found, scan.populated) {
        (Action::Update | Action::FindEmpty, false, _) => PlanAction::Skip(SkipReason::KeyAbsent),
        (Action::Update, true, false) => PlanAction::Skip(SkipReason::NoValueToUpdate),
        (Action::FindEmpty, true, true) => {
            PlanAction::Skip(SkipReason::AlreadyPopulated {
                existing: existing(),
            })
        }
        (Action::Update, true, true) | (Action::FindEmpty, true, false) => scan
            .line_index
            .map_or(PlanAction::Skip(SkipReason::KeyAbsent), PlanAction::ReplaceAt),
        (Action::FindMissing, true, _) => PlanAction::Skip(SkipReason::AlreadyPresent {
            existing: existing(),
        }),
        (Action::FindMissing, false, _) => scan
            .block_end
            .map_or(PlanAction::Skip(SkipReason::Unterminated), PlanAction::InsertBefore),
    }
}
