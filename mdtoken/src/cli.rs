// src/cli.rs
use clap::{ArgGroup, Parser};
use std::path::PathBuf;

use crate::models::{Action, TopicCategory};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("supply").required(true).args(["value", "values"])))]
pub struct Args {
    /// Directory holding the markdown files (not searched recursively)
    #[arg(short, long, default_value = ".")]
    pub directory: PathBuf,

    /// What to do with the token
    #[arg(short, long, value_enum)]
    pub action: Action,

    /// Metadata token to reconcile (e.g., "ms.author")
    #[arg(short, long)]
    pub key: String,

    /// Vocabulary the token is validated against
    #[arg(short, long, value_enum, default_value_t = TopicCategory::Reference)]
    pub category: TopicCategory,

    /// Value to write into every matching file (comma-separated for list tokens)
    #[arg(short, long)]
    pub value: Option<String>,

    /// YAML file mapping file names to values
    #[arg(long)]
    pub values: Option<PathBuf>,

    /// Report what would change without writing
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Config file (defaults to the nearest .mdtoken.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Reference token list, overriding the config
    #[arg(long)]
    pub reference_tokens: Option<PathBuf>,

    /// Conceptual token list, overriding the config
    #[arg(long)]
    pub conceptual_tokens: Option<PathBuf>,

    /// Log level: error, warn, info, debug or trace
    #[arg(long)]
    pub log_level: Option<String>,
}
