// tests/integration_tests/rewrite_scenarios_test.rs
use super::common::{lines, write_doc};
use anyhow::Result;
use mdtoken::{
    Action, BatchRequest, FixedValue, KeyValueLine, ListKeys, OutcomeKind, PlanAction,
    RewritePlan, SkipReason, apply, decide, locate, process_file, render_lines,
};
use std::fs;
use tempfile::TempDir;

fn sample() -> Vec<String> {
    lines(&["---", "title: X", "description:", "---", "body"])
}

#[test]
fn test_lines_without_colon_keep_whole_key() {
    for raw in ["---", "", "# Heading", "- item"] {
        let kv = KeyValueLine::parse(raw);
        assert!(!kv.has_colon);
        assert_eq!(kv.key, raw);
    }
}

#[test]
fn test_fill_empty_description() {
    let document = sample();

    let scan = locate(&document, "description");
    assert!(scan.found);
    assert!(!scan.populated);
    assert_eq!(scan.line_index, Some(2));

    let action = decide(Action::FindEmpty, &scan);
    assert_eq!(action, PlanAction::ReplaceAt(2));

    let rendered = render_lines("description", "hello", &ListKeys::default());
    let rewritten = apply(&document, &RewritePlan::new(action, rendered));
    assert_eq!(
        rewritten,
        Some(lines(&["---", "title: X", "description: hello", "---", "body"]))
    );
}

#[test]
fn test_insert_missing_author_before_closing_delimiter() {
    let document = sample();

    let scan = locate(&document, "ms.author");
    assert!(!scan.found);

    let action = decide(Action::FindMissing, &scan);
    assert_eq!(action, PlanAction::InsertBefore(3));

    let rendered = render_lines("ms.author", "jdoe", &ListKeys::default());
    let rewritten = apply(&document, &RewritePlan::new(action, rendered));
    assert_eq!(
        rewritten,
        Some(lines(&[
            "---",
            "title: X",
            "description:",
            "ms.author: jdoe",
            "---",
            "body"
        ]))
    );
}

#[test]
fn test_replace_then_rescan_finds_new_value() {
    let document = lines(&["---", "ms.date: 01/02/2024", "---"]);
    let scan = locate(&document, "ms.date");
    let action = decide(Action::Update, &scan);
    let rendered = render_lines("ms.date", "10/18/2026", &ListKeys::default());

    let rewritten = apply(&document, &RewritePlan::new(action, rendered)).unwrap_or_default();
    let rescan = locate(&rewritten, "ms.date");

    assert!(rescan.found);
    assert!(rescan.populated);
    assert_eq!(rescan.existing_value, "10/18/2026");
}

#[test]
fn test_list_key_renders_four_lines() {
    let rendered = render_lines("product", "a,b,c", &ListKeys::default());
    assert_eq!(rendered, lines(&["product:", "- a", "- b", "- c"]));
}

#[test]
fn test_single_delimiter_document() {
    let document = lines(&["---", "title: X", "ms.author: jdoe", "body"]);
    let scan = locate(&document, "title");
    assert!(scan.found, "keys before a missing terminator are still seen");

    let document = lines(&["---", "body"]);
    for key in ["title", "ms.author", "product"] {
        let scan = locate(&document, key);
        assert!(!scan.found);
        assert_eq!(
            decide(Action::FindMissing, &scan),
            PlanAction::Skip(SkipReason::Unterminated)
        );
    }
}

#[test]
fn test_update_on_empty_key_leaves_bytes_untouched() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let original = "---\ntitle: X\ndescription:\n---\nbody";
    write_doc(temp_dir.path(), "doc.md", original)?;
    let path = temp_dir.path().join("doc.md");

    let request = BatchRequest::new(Action::Update, "description");
    let outcome = process_file(&path, &request, &FixedValue("hello".to_owned()));

    assert!(matches!(
        outcome.kind,
        OutcomeKind::Skipped(SkipReason::NoValueToUpdate)
    ));
    assert_eq!(fs::read(&path)?, original.as_bytes());
    Ok(())
}

#[test]
fn test_list_key_fill_rewrites_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write_doc(
        temp_dir.path(),
        "api.md",
        "---\ntitle: API\nproduct:\n---\nbody\n",
    )?;
    let path = temp_dir.path().join("api.md");

    let request = BatchRequest::new(Action::FindEmpty, "product");
    let outcome = process_file(&path, &request, &FixedValue("vs,vscode".to_owned()));

    assert!(matches!(outcome.kind, OutcomeKind::Rewritten { .. }));
    assert_eq!(
        fs::read_to_string(&path)?,
        "---\ntitle: API\nproduct:\n- vs\n- vscode\n---\nbody\n"
    );
    Ok(())
}

#[test]
fn test_byte_order_mark_hides_opening_delimiter() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let original = "\u{feff}---\ntitle: X\n---\nbody\n";
    write_doc(temp_dir.path(), "bom.md", original)?;
    let path = temp_dir.path().join("bom.md");

    let request = BatchRequest::new(Action::FindMissing, "ms.author");
    let outcome = process_file(&path, &request, &FixedValue("jdoe".to_owned()));

    assert!(matches!(
        outcome.kind,
        OutcomeKind::Skipped(SkipReason::Unterminated)
    ));
    assert_eq!(fs::read(&path)?, original.as_bytes());
    Ok(())
}
