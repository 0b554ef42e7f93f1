// tests/integration_tests/directory_pass_test.rs
use super::common::{read, setup_docs_directory};
use anyhow::Result;
use mdtoken::{
    Action, BatchRequest, Exclusions, FixedValue, OutcomeKind, SkipReason, ValueMap,
    process_directory,
};
use std::path::Path;

fn reason_for<'a>(summary: &'a mdtoken::BatchSummary, name: &str) -> Option<&'a OutcomeKind> {
    summary
        .outcomes
        .iter()
        .find(|o| o.path.file_name().is_some_and(|n| n == name))
        .map(|o| &o.kind)
}

#[test]
fn test_update_pass() -> Result<()> {
    let temp_dir = setup_docs_directory()?;
    let request = BatchRequest::new(Action::Update, "ms.author");
    let summary = process_directory(
        temp_dir.path(),
        &Exclusions::new(),
        &request,
        &FixedValue("bob".to_owned()),
    )?;

    assert_eq!(summary.modified, 1);
    assert_eq!(summary.skipped, 3);
    assert_eq!(
        read(temp_dir.path(), "populated.md")?,
        "---\ntitle: Populated\nms.author: bob\n---\n# Populated\n"
    );
    assert!(matches!(
        reason_for(&summary, "empty.md"),
        Some(OutcomeKind::Skipped(SkipReason::NoValueToUpdate))
    ));
    assert!(matches!(
        reason_for(&summary, "missing.md"),
        Some(OutcomeKind::Skipped(SkipReason::KeyAbsent))
    ));
    assert!(matches!(
        reason_for(&summary, "unterminated.md"),
        Some(OutcomeKind::Skipped(SkipReason::KeyAbsent))
    ));
    Ok(())
}

#[test]
fn test_find_missing_pass() -> Result<()> {
    let temp_dir = setup_docs_directory()?;
    let request = BatchRequest::new(Action::FindMissing, "ms.author");
    let summary = process_directory(
        temp_dir.path(),
        &Exclusions::new(),
        &request,
        &FixedValue("bob".to_owned()),
    )?;

    assert_eq!(summary.modified, 1);
    assert_eq!(
        read(temp_dir.path(), "missing.md")?,
        "---\ntitle: Missing\nms.author: bob\n---\n# Missing\n"
    );
    assert_eq!(
        read(temp_dir.path(), "unterminated.md")?,
        "---\ntitle: Unterminated\n# Unterminated\n"
    );
    assert_eq!(read(temp_dir.path(), "index.md")?, "---\ntitle: Home\n---\n");
    assert!(matches!(
        reason_for(&summary, "empty.md"),
        Some(OutcomeKind::Skipped(SkipReason::AlreadyPresent { existing })) if existing.is_empty()
    ));
    Ok(())
}

#[test]
fn test_per_file_values() -> Result<()> {
    let temp_dir = setup_docs_directory()?;
    let values = ValueMap::parse(
        "empty.md: carol\nmissing.md: dave\n",
        Path::new("values.yaml"),
    )?;
    let request = BatchRequest::new(Action::FindEmpty, "ms.author");
    let summary = process_directory(temp_dir.path(), &Exclusions::new(), &request, &values)?;

    assert_eq!(summary.modified, 1);
    assert_eq!(
        read(temp_dir.path(), "empty.md")?,
        "---\ntitle: Empty\nms.author: carol\n---\n# Empty\n"
    );
    assert_eq!(
        read(temp_dir.path(), "archive/old.md")?,
        "---\ntitle: Old\nms.author:\n---\n"
    );
    Ok(())
}

#[test]
fn test_second_pass_changes_nothing() -> Result<()> {
    let temp_dir = setup_docs_directory()?;
    let request = BatchRequest::new(Action::FindMissing, "ms.date");
    let values = FixedValue("10/18/2026".to_owned());

    let first = process_directory(temp_dir.path(), &Exclusions::new(), &request, &values)?;
    let second = process_directory(temp_dir.path(), &Exclusions::new(), &request, &values)?;

    assert_eq!(first.modified, 3);
    assert_eq!(second.modified, 0);
    Ok(())
}
