//! Filename filter settings shared by `[[migrate.rules]]` and `[[catalog.domains]]`.
//!
//! # Example
//!
//! ```toml
//! filter = { extensions = ["svg", "png"], exclude = "(?i)^draft" }
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Accepted extensions without the leading dot. Empty accepts any.
    pub extensions: Vec<String>,
    /// Regex the filename must match.
    pub include: Option<String>,
    /// Regex the filename must not match.
    pub exclude: Option<String>,
}

impl FilterConfig {
    /// Report patterns that do not compile.
    pub fn validate(&self, field: FieldPath, idx: usize, diag: &mut ConfigDiagnostics) {
        for (label, pattern) in [("include", &self.include), ("exclude", &self.exclude)] {
            let Some(pattern) = pattern else { continue };
            if let Err(e) = regex::Regex::new(pattern) {
                diag.error_with_hint(
                    field,
                    format!("[{idx}] invalid filter.{label} pattern `{pattern}`"),
                    e.to_string(),
                );
            }
        }
        if self.extensions.iter().any(|e| e.starts_with('.')) {
            diag.warn(
                field,
                format!("[{idx}] filter.extensions entries are matched without the leading dot"),
            );
        }
    }
}
