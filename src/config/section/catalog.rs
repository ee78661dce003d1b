//! `[catalog]` section configuration.
//!
//! Each `[[catalog.domains]]` entry produces one JSON file under
//! `catalog.output`.
//!
//! # Example
//!
//! ```toml
//! [catalog]
//! output = "src/data/catalogs"
//! version = "1.0.0"
//!
//! [[catalog.domains]]
//! name = "backgrounds"
//! layout = "grouped"
//! key = "variants"
//! sources = [{ dir = "public/assets/backgrounds", url = "/assets/backgrounds" }]
//! filter = { extensions = ["jpg", "png", "webp"] }
//! ```

use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::FilterConfig;
use crate::config::{ConfigDiagnostics, FieldPath};
use crate::utils::path::expand_path;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Directory receiving one JSON file per domain.
    pub output: PathBuf,
    /// Version string written into every catalog document.
    pub version: String,
    pub domains: Vec<DomainConfig>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            output: "catalogs".into(),
            version: "1.0.0".into(),
            domains: Vec::new(),
        }
    }
}

/// Shape of the entries field in a catalog document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// `"key": [descriptor, ...]`
    #[default]
    Flat,
    /// `"key": { category: { "count": n, "assets": [...] } }`
    Grouped,
}

/// One `[[catalog.domains]]` entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainConfig {
    pub name: String,
    /// Output filename; defaults to `{name}.json`.
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default)]
    pub layout: Layout,
    /// Top-level field holding the entries (`icons`, `categories`, ...).
    #[serde(default = "default_key")]
    pub key: String,
    /// Sort directory entries by name while walking.
    #[serde(default)]
    pub sorted: bool,
    pub sources: Vec<SourceConfig>,
    #[serde(default)]
    pub filter: FilterConfig,
}

fn default_key() -> String {
    "assets".into()
}

/// A scan root with its public URL prefix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub dir: PathBuf,
    pub url: String,
    /// Stop accepting entries from this source after `limit` files.
    #[serde(default)]
    pub limit: Option<usize>,
}

impl DomainConfig {
    /// Output filename inside `catalog.output`.
    pub fn output_file(&self) -> String {
        self.file
            .clone()
            .unwrap_or_else(|| format!("{}.json", self.name))
    }
}

impl CatalogConfig {
    pub const VERSION: FieldPath = FieldPath::new("catalog.version");
    pub const DOMAINS: FieldPath = FieldPath::new("catalog.domains");

    /// Resolve output and source paths against the project root.
    pub fn normalize(&mut self, root: &Path) {
        self.output = expand_path(&self.output, root);
        for domain in &mut self.domains {
            for source in &mut domain.sources {
                source.dir = expand_path(&source.dir, root);
            }
        }
    }

    /// Path of the JSON file written for `domain`.
    pub fn output_path(&self, domain: &DomainConfig) -> PathBuf {
        self.output.join(domain.output_file())
    }

    /// Look up a domain by name.
    pub fn domain(&self, name: &str) -> Option<&DomainConfig> {
        self.domains.iter().find(|d| d.name == name)
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.version.trim().is_empty() {
            diag.error(Self::VERSION, "version is empty");
        }

        let mut names: FxHashMap<&str, usize> = FxHashMap::default();
        let mut files: FxHashMap<String, usize> = FxHashMap::default();

        for (idx, domain) in self.domains.iter().enumerate() {
            let name = domain.name.trim();
            if name.is_empty() {
                diag.error(Self::DOMAINS, format!("[{idx}] domain name is empty"));
            } else if let Some(prev) = names.insert(name, idx) {
                diag.error(
                    Self::DOMAINS,
                    format!("[{idx}] duplicate domain name `{name}` (first declared at [{prev}])"),
                );
            }

            let file = domain.output_file();
            if let Some(prev) = files.insert(file.clone(), idx) {
                diag.error_with_hint(
                    Self::DOMAINS,
                    format!("[{idx}] output conflict: domains [{prev}] and [{idx}] both write `{file}`"),
                    "set a distinct `file` for one of them",
                );
            }

            if domain.key.trim().is_empty() {
                diag.error(Self::DOMAINS, format!("[{idx}] key is empty"));
            } else if matches!(domain.key.as_str(), "name" | "version" | "total") {
                diag.error(
                    Self::DOMAINS,
                    format!("[{idx}] key `{}` collides with a catalog header field", domain.key),
                );
            }

            if domain.sources.is_empty() {
                diag.error_with_hint(
                    Self::DOMAINS,
                    format!("[{idx}] domain `{name}` has no sources"),
                    "add `sources = [{ dir = \"...\", url = \"...\" }]`",
                );
            }
            for source in &domain.sources {
                if source.limit == Some(0) {
                    diag.warn(
                        Self::DOMAINS,
                        format!("[{idx}] source `{}` has limit 0 and contributes nothing", source.dir.display()),
                    );
                }
            }

            domain.filter.validate(Self::DOMAINS, idx, diag);
        }
    }
}
