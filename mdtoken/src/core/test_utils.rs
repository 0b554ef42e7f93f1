// src/core/test_utils.rs
use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Writes `content` to `name` under `dir`, creating parent directories, and
/// returns the full path.
pub fn write_doc(dir: &TempDir, name: &str, content: &str) -> Result<PathBuf> {
    let path = dir.path().join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, content)?;
    Ok(path)
}

/// A directory with one document per token state plus the names the
/// selector must pass over.
pub fn setup_test_directory() -> Result<TempDir> {
    let dir = TempDir::new()?;

    for (name, content) in [
        ("populated.md", "---\ntitle: A\nms.author: alice\n---\nBody\n"),
        ("empty.md", "---\ntitle: B\nms.author:\n---\nBody\n"),
        ("missing.md", "---\ntitle: C\n---\nBody\n"),
        ("index.md", "---\ntitle: Index\n---\n"),
        ("TOC.md", "- [A](populated.md)\n"),
        ("notes.txt", "---\nms.author:\n---\n"),
        ("nested/deep.md", "---\nms.author:\n---\n"),
    ] {
        write_doc(&dir, name, content)?;
    }

    Ok(dir)
}
