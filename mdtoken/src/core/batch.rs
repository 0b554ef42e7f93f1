// src/core/batch.rs
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::core::builder::{ListKeys, render_lines};
use crate::core::ignore::Exclusions;
use crate::core::locator::locate;
use crate::core::planner::decide;
use crate::core::rewriter::{apply_document, commit};
use crate::core::values::ValueSource;
use crate::error::{MetadataError, Result};
use crate::models::{
    Action, BatchSummary, Document, FileOutcome, OutcomeKind, PlanAction, RewritePlan, SkipReason,
};

/// Fully resolved parameters for one directory pass.
#[derive(Debug, Clone)]
pub struct BatchRequest {
    pub action: Action,
    pub key: String,
    pub list_keys: ListKeys,
    /// Plan and report without writing anything.
    pub dry_run: bool,
}

impl BatchRequest {
    #[must_use]
    pub fn new(action: Action, key: impl Into<String>) -> Self {
        Self {
            action,
            key: key.into(),
            list_keys: ListKeys::default(),
            dry_run: false,
        }
    }
}

/// One `.md` file chosen for processing, or an entry that looked like one
/// but could not be inspected.
pub type Selected = std::result::Result<PathBuf, (PathBuf, MetadataError)>;

/// Lists the `.md` files directly inside `dir`, sorted by file name.
///
/// Subdirectories are not entered. Names rejected by `exclusions`, which
/// always include `index.md` and `TOC.md`, are left out. An entry that
/// cannot be inspected, such as a dangling symlink, comes back as an `Err`
/// item carrying its own path so the pass can report it and move on.
///
/// # Errors
///
/// This function may return an error if:
/// * `dir` does not exist or is not a directory
/// * The directory listing itself cannot be read
pub fn select_documents(dir: &Path, exclusions: &Exclusions) -> Result<Vec<Selected>> {
    if !dir.is_dir() {
        return Err(MetadataError::NotADirectory(dir.to_path_buf()));
    }

    let mut documents = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                let source = e
                    .into_io_error()
                    .unwrap_or_else(|| io::Error::other("directory cannot be listed"));
                return Err(MetadataError::io(dir, source));
            }
            Err(e) => {
                let Some(path) = e.path().map(Path::to_path_buf) else {
                    warn!(dir = %dir.display(), error = %e, "unreadable entry");
                    continue;
                };
                if !is_candidate(&path, exclusions) {
                    continue;
                }
                let source = e
                    .into_io_error()
                    .unwrap_or_else(|| io::Error::other("filesystem loop"));
                let error = MetadataError::io(&path, source);
                documents.push(Err((path, error)));
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        if is_candidate(entry.path(), exclusions) {
            documents.push(Ok(entry.into_path()));
        }
    }

    Ok(documents)
}

fn is_candidate(path: &Path, exclusions: &Exclusions) -> bool {
    let is_markdown = path.extension().is_some_and(|ext| ext == "md");
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    if !is_markdown || exclusions.is_excluded(name) {
        debug!(file = name, "not selected");
        return false;
    }
    true
}

/// Classifies, plans and (unless skipped) rewrites a single document.
///
/// Never fails: read and write errors become [`OutcomeKind::Failed`] so the
/// caller can carry on with the next file.
pub fn process_file(
    path: &Path,
    request: &BatchRequest,
    values: &dyn ValueSource,
) -> FileOutcome {
    let kind = match rewrite_file(path, request, values) {
        Ok(kind) => kind,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "skipping file");
            OutcomeKind::Failed(err)
        }
    };
    FileOutcome::new(path.to_path_buf(), kind)
}

fn rewrite_file(
    path: &Path,
    request: &BatchRequest,
    values: &dyn ValueSource,
) -> Result<OutcomeKind> {
    let content = fs::read_to_string(path).map_err(|e| MetadataError::io(path, e))?;
    let document = Document::parse(&content);

    let scan = locate(document.lines(), &request.key);
    let action = decide(request.action, &scan);
    debug!(path = %path.display(), ?scan, ?action, "classified");

    if let PlanAction::Skip(reason) = action {
        return Ok(OutcomeKind::Skipped(reason));
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let Some(value) = values
        .value_for(&file_name)
        .filter(|v| !v.trim().is_empty())
    else {
        return Ok(OutcomeKind::Skipped(SkipReason::NoValueSupplied));
    };

    let rendered = render_lines(&request.key, &value, &request.list_keys);
    let plan = RewritePlan::new(action, rendered);
    let Some(rewritten) = apply_document(&document, &plan) else {
        return Ok(OutcomeKind::Skipped(SkipReason::KeyAbsent));
    };

    if request.dry_run {
        return Ok(OutcomeKind::Planned {
            rendered: plan.rendered_lines,
        });
    }

    commit(path, &rewritten)?;
    info!(path = %path.display(), key = %request.key, "rewrote front matter");
    Ok(OutcomeKind::Rewritten {
        rendered: plan.rendered_lines,
    })
}

/// Runs one full pass over the selected documents in `dir`, one file at a time.
///
/// # Errors
///
/// Fails only when the directory itself cannot be listed. Per-file problems,
/// including entries that cannot be inspected, are recorded in the returned
/// summary.
pub fn process_directory(
    dir: &Path,
    exclusions: &Exclusions,
    request: &BatchRequest,
    values: &dyn ValueSource,
) -> Result<BatchSummary> {
    let documents = select_documents(dir, exclusions)?;
    let mut summary = BatchSummary::new();

    for selected in documents {
        let outcome = match selected {
            Ok(path) => process_file(&path, request, values),
            Err((path, err)) => {
                warn!(path = %path.display(), error = %err, "skipping file");
                FileOutcome::new(path, OutcomeKind::Failed(err))
            }
        };
        summary.record(outcome);
    }

    info!(
        dir = %dir.display(),
        action = %request.action,
        key = %request.key,
        modified = summary.modified,
        skipped = summary.skipped,
        failed = summary.failed,
        "pass finished"
    );
    Ok(summary)
}
