// src/config.rs
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::builder::ListKeys;
use crate::core::ignore::find_upward;
use crate::error::{MetadataError, Result};

/// Name of the config file looked up from the target directory upwards.
pub const CONFIG_FILE: &str = ".mdtoken.toml";

const DEFAULT_REFERENCE_TOKENS: &str = "reference_tokens.txt";
const DEFAULT_CONCEPTUAL_TOKENS: &str = "conceptual_tokens.txt";

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Keys rendered as block lists. Falls back to the built-in table.
    pub list_keys: Option<Vec<String>>,
    /// Extra file-name globs to leave out of a pass.
    pub exclude: Vec<String>,
    pub vocabulary: VocabularyConfig,
    pub logging: LoggingConfig,
    /// Directory relative paths in this config resolve against.
    #[serde(skip)]
    pub base_dir: PathBuf,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VocabularyConfig {
    pub reference: Option<PathBuf>,
    pub conceptual: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl Config {
    /// Parses TOML `content`, resolving relative paths against `base_dir`.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError::Config`] when the TOML is malformed or has
    /// unknown fields.
    pub fn parse(content: &str, origin: &Path, base_dir: &Path) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(|source| MetadataError::Config {
            path: origin.to_path_buf(),
            source,
        })?;
        config.base_dir = base_dir.to_path_buf();
        Ok(config)
    }

    /// Reads the config file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError::Io`] if the file cannot be read and
    /// [`MetadataError::Config`] if it cannot be parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| MetadataError::io(path, e))?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        let config = Self::parse(&content, path, base_dir)?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Uses the nearest `.mdtoken.toml` at or above `dir`, or the defaults
    /// (relative to `fallback_base`) when there is none.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`] for the file that was found.
    pub fn discover(dir: &Path, fallback_base: &Path) -> Result<Self> {
        find_upward(dir, CONFIG_FILE).map_or_else(
            || {
                Ok(Self {
                    base_dir: fallback_base.to_path_buf(),
                    ..Self::default()
                })
            },
            |path| Self::load(&path),
        )
    }

    #[must_use]
    pub fn reference_tokens(&self) -> PathBuf {
        self.resolve(
            self.vocabulary
                .reference
                .as_deref()
                .unwrap_or_else(|| Path::new(DEFAULT_REFERENCE_TOKENS)),
        )
    }

    #[must_use]
    pub fn conceptual_tokens(&self) -> PathBuf {
        self.resolve(
            self.vocabulary
                .conceptual
                .as_deref()
                .unwrap_or_else(|| Path::new(DEFAULT_CONCEPTUAL_TOKENS)),
        )
    }

    #[must_use]
    pub fn list_keys(&self) -> ListKeys {
        self.list_keys
            .as_ref()
            .map_or_else(ListKeys::default, |keys| ListKeys::new(keys.iter().cloned()))
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }
}
