// src/core/rewriter.rs
use std::fs;
use std::io::Write as _;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{MetadataError, Result};
use crate::models::{Document, PlanAction, RewritePlan};

/// The `start..end` range of lines that `plan` replaces, or `None` for a
/// skip plan or an index outside a document of `len` lines.
const fn span(plan: &RewritePlan, len: usize) -> Option<(usize, usize)> {
    match plan.action {
        PlanAction::ReplaceAt(index) if index < len => Some((index, index.saturating_add(1))),
        PlanAction::InsertBefore(index) if index <= len => Some((index, index)),
        PlanAction::ReplaceAt(_) | PlanAction::InsertBefore(_) | PlanAction::Skip(_) => None,
    }
}

/// Applies `plan` to `lines`, returning the new line sequence.
///
/// Returns `None` for a skip plan, or when the index lies outside the
/// document. Nothing must be written in that case.
#[must_use]
pub fn apply(lines: &[String], plan: &RewritePlan) -> Option<Vec<String>> {
    let (head_end, tail_start) = span(plan, lines.len())?;

    let mut out = Vec::with_capacity(lines.len().saturating_add(plan.rendered_lines.len()));
    out.extend_from_slice(lines.get(..head_end)?);
    out.extend(plan.rendered_lines.iter().cloned());
    out.extend_from_slice(lines.get(tail_start..)?);
    Some(out)
}

/// [`apply`] on a whole document, keeping the line endings of every line the
/// plan does not touch.
#[must_use]
pub fn apply_document(document: &Document, plan: &RewritePlan) -> Option<Document> {
    let (start, end) = span(plan, document.lines().len())?;
    document.splice(start, end, &plan.rendered_lines)
}

/// Replaces the file at `path` with `document`.
///
/// A symlinked `path` is resolved first, so the file it points to is
/// rewritten and the link stays in place. The content goes to a temporary
/// file next to that target and is then renamed over it, so readers see
/// either the old or the new file. The original permissions are kept.
///
/// # Errors
///
/// Returns [`MetadataError::Io`] if `path` cannot be resolved, or if the
/// temporary file cannot be created, written or renamed over the target.
pub fn commit(path: &Path, document: &Document) -> Result<()> {
    let target = fs::canonicalize(path).map_err(|e| MetadataError::io(path, e))?;
    let dir = target.parent().unwrap_or_else(|| Path::new("."));

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| MetadataError::io(&target, e))?;
    tmp.write_all(document.render().as_bytes())
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|e| MetadataError::io(&target, e))?;

    if let Ok(metadata) = fs::metadata(&target) {
        fs::set_permissions(tmp.path(), metadata.permissions())
            .map_err(|e| MetadataError::io(&target, e))?;
    }

    tmp.persist(&target)
        .map_err(|e| MetadataError::io(&target, e.error))?;
    debug!(path = %path.display(), target = %target.display(), "committed rewrite");
    Ok(())
}
