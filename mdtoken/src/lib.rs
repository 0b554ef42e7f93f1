// src/lib.rs
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod models;
pub mod utils;

pub use cli::Args;
pub use config::{CONFIG_FILE, Config};
pub use crate::core::batch::{
    BatchRequest, Selected, process_directory, process_file, select_documents,
};
pub use crate::core::builder::{DEFAULT_LIST_KEYS, ListKeys, render_lines};
pub use crate::core::ignore::{ALWAYS_EXCLUDED, Exclusions, IGNORE_FILE, load_exclusions};
pub use crate::core::line::KeyValueLine;
pub use crate::core::locator::{DELIMITER, locate};
pub use crate::core::planner::decide;
pub use crate::core::rewriter::{apply, apply_document, commit};
pub use crate::core::values::{FixedValue, ValueMap, ValueSource};
pub use crate::core::vocabulary::{Vocabularies, VocabularyList};
pub use error::MetadataError;
pub use models::{
    Action, BatchSummary, Document, FileOutcome, LineEnding, OutcomeKind, PlanAction,
    RewritePlan, ScanResult, SkipReason, TopicCategory,
};

use anyhow::{Context as _, Result};
use std::env;
use std::path::PathBuf;
use tracing::debug;

/// Validates the arguments, then runs one pass over the directory.
///
/// # Errors
///
/// This function may return an error if:
/// * The config file or value map cannot be read or parsed
/// * Either vocabulary list cannot be read
/// * The key is not in the chosen vocabulary, or the value is blank
/// * The directory cannot be listed
pub fn run(args: Args) -> Result<BatchSummary> {
    let directory = if args.directory.is_absolute() {
        args.directory.clone()
    } else {
        env::current_dir()?.join(&args.directory)
    };

    let config = match &args.config {
        Some(path) => Config::load(path),
        None => Config::discover(&directory, &env::current_dir()?),
    }
    .context("Failed to load configuration")?;

    logging::init(args.log_level.as_deref().or(config.logging.level.as_deref()));

    let reference = args
        .reference_tokens
        .clone()
        .unwrap_or_else(|| config.reference_tokens());
    let conceptual = args
        .conceptual_tokens
        .clone()
        .unwrap_or_else(|| config.conceptual_tokens());
    let vocabularies = Vocabularies::load(&reference, &conceptual)?;
    vocabularies.ensure_known(args.category, &args.key)?;

    let values = value_source(&args)?;
    let exclusions = load_exclusions(&directory, &config.exclude)?;

    let request = BatchRequest {
        action: args.action,
        key: args.key.clone(),
        list_keys: config.list_keys(),
        dry_run: args.dry_run,
    };
    debug!(?request, dir = %directory.display(), "starting pass");

    let summary = process_directory(&directory, &exclusions, &request, values.as_ref())
        .with_context(|| format!("Failed to process directory: {}", directory.display()))?;
    utils::print_summary(&summary, args.dry_run);
    Ok(summary)
}

fn value_source(args: &Args) -> Result<Box<dyn ValueSource>> {
    match (&args.value, &args.values) {
        (Some(value), _) if value.trim().is_empty() => Err(MetadataError::EmptyValue {
            key: args.key.clone(),
        }
        .into()),
        (Some(value), _) => Ok(Box::new(FixedValue(value.clone()))),
        (None, Some(path)) => Ok(Box::new(ValueMap::load(path)?)),
        (None, None) => Err(MetadataError::EmptyValue {
            key: args.key.clone(),
        }
        .into()),
    }
}
