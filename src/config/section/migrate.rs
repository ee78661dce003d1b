//! `[migrate]` section configuration.
//!
//! Declares the copy rules run by `swatch migrate`, in order.
//!
//! # Example
//!
//! ```toml
//! [migrate]
//! progress_interval = 100
//!
//! [[migrate.rules]]
//! name = "payment-logos"
//! source = "~/design-kit/payment"
//! dest = "public/assets/payment"
//! filter = { extensions = ["svg"] }
//! ```

use std::path::{Path, PathBuf};

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::FilterConfig;
use crate::config::{ConfigDiagnostics, FieldPath};
use crate::utils::path::expand_path;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MigrateConfig {
    /// Log a progress line every N copied files.
    pub progress_interval: usize,
    /// Copy rules, run in declaration order.
    pub rules: Vec<RuleConfig>,
}

impl Default for MigrateConfig {
    fn default() -> Self {
        Self {
            progress_interval: 100,
            rules: Vec::new(),
        }
    }
}

/// One `[[migrate.rules]]` entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleConfig {
    pub name: String,
    pub source: PathBuf,
    pub dest: PathBuf,
    #[serde(default)]
    pub filter: FilterConfig,
}

impl MigrateConfig {
    pub const PROGRESS_INTERVAL: FieldPath = FieldPath::new("migrate.progress_interval");
    pub const RULES: FieldPath = FieldPath::new("migrate.rules");

    /// Resolve rule paths against the project root.
    pub fn normalize(&mut self, root: &Path) {
        for rule in &mut self.rules {
            rule.source = expand_path(&rule.source, root);
            rule.dest = expand_path(&rule.dest, root);
        }
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.progress_interval == 0 {
            diag.error(Self::PROGRESS_INTERVAL, "must be greater than 0");
        }

        let mut seen = FxHashSet::default();
        for (idx, rule) in self.rules.iter().enumerate() {
            let name = rule.name.trim();
            if name.is_empty() {
                diag.error(Self::RULES, format!("[{idx}] rule name is empty"));
            } else if !seen.insert(name) {
                diag.error_with_hint(
                    Self::RULES,
                    format!("[{idx}] duplicate rule name `{name}`"),
                    "rule names appear in the summary and must be unique",
                );
            }

            if rule.source == rule.dest {
                diag.error(
                    Self::RULES,
                    format!("[{idx}] source and dest are the same directory"),
                );
            } else if rule.dest.starts_with(&rule.source) {
                diag.warn(
                    Self::RULES,
                    format!(
                        "[{idx}] dest `{}` is inside source; copied files may be revisited",
                        rule.dest.display()
                    ),
                );
            }

            rule.filter.validate(Self::RULES, idx, diag);
        }
    }
}
