//! `swatch.toml` loading.
//!
//! ```text
//! config/
//! ├── section/       # one module per TOML section
//! │   ├── migrate    # [migrate] + [[migrate.rules]]
//! │   ├── catalog    # [catalog] + [[catalog.domains]]
//! │   └── filter     # filter = { ... } (shared)
//! ├── types/
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # Config
//! ```
//!
//! Every relative path in the file is resolved against the directory that
//! holds `swatch.toml`, after `~` expansion.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{CatalogConfig, DomainConfig, Layout, MigrateConfig, RuleConfig};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::log;
use crate::utils::path::normalize_path;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Parsed `swatch.toml`. After [`Config::from_path`] every path is absolute.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Where the file was loaded from; empty for in-memory configs.
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Directory holding the file; relative paths resolve against it.
    #[serde(skip)]
    pub root: PathBuf,

    #[serde(default)]
    pub migrate: MigrateConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl Config {
    /// Locate `config_name` upward from the current directory and load it.
    pub fn load(config_name: &Path) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        let path = find_config_file(config_name, &cwd)
            .ok_or_else(|| ConfigError::NotFound(config_name.to_path_buf()))?;
        Self::from_path(&path)
    }

    /// Parse TOML only: no root, no path normalization, no validation.
    pub fn from_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load, normalize and validate the config file at `path`.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let (mut config, ignored) =
            Self::parse_with_ignored(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        for field in &ignored {
            log!("warning"; "{}: unknown field `{field}` ignored", path.display());
        }

        config.config_path = normalize_path(path);
        config.root = config
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        config.resolve_paths();
        config.validate()?;

        Ok(config)
    }

    /// Deserialize, returning the dotted paths of keys no field claimed.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), toml::de::Error> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// `path` shortened to be relative to the project root when inside it.
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    fn resolve_paths(&mut self) {
        self.migrate.normalize(&self.root);
        self.catalog.normalize(&self.root);
    }

    /// Run every section's checks, print warnings, and fail with all errors at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();
        self.migrate.validate(&mut diag);
        self.catalog.validate(&mut diag);
        diag.print_warnings();
        diag.into_result().map_err(|e| ConfigError::Invalid(e).into())
    }
}

/// Parse without touching the filesystem; unknown keys fail the test.
#[cfg(test)]
pub fn test_parse_config(content: &str) -> Config {
    let (parsed, ignored) = Config::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
