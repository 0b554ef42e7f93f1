// src/core/ignore/loader.rs
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::ignore::Exclusions;
use crate::error::{MetadataError, Result};

/// Name of the per-directory exclusion file.
pub const IGNORE_FILE: &str = ".mdtokenignore";

/// Looks for `name` in `dir`, then in each parent directory, returning the
/// first one found.
#[must_use]
pub fn find_upward(dir: &Path, name: &str) -> Option<PathBuf> {
    let mut current_dir = dir.to_path_buf();
    let mut visited = HashSet::new();

    while visited.insert(current_dir.clone()) {
        let candidate = current_dir.join(name);
        if candidate.is_file() {
            return Some(candidate);
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => break,
        }
    }

    None
}

/// Builds the exclusion list for `dir` from `extra` patterns and the nearest
/// `.mdtokenignore`, searching `dir` and then its parents.
///
/// # Errors
///
/// This function may return an error if:
/// * The `.mdtokenignore` file exists but cannot be read
/// * A pattern contains invalid glob syntax
pub fn load_exclusions(dir: &Path, extra: &[String]) -> Result<Exclusions> {
    let mut exclusions = Exclusions::new();

    for pattern in extra {
        exclusions.add_pattern(pattern)?;
    }

    if let Some(ignore_file) = find_upward(dir, IGNORE_FILE) {
        let content =
            fs::read_to_string(&ignore_file).map_err(|e| MetadataError::io(&ignore_file, e))?;
        for line in content.lines() {
            exclusions.add_pattern(line)?;
        }
    }

    Ok(exclusions)
}
