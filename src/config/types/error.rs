//! Errors raised while loading `swatch.toml`.

use super::FieldPath;
use crate::logger::paint;
use crate::utils::plural_count;
use owo_colors::{Stream, Style};
use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file `{path}`")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("config file `{path}` is not valid TOML")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("no `{0}` in the current directory or any parent")]
    NotFound(PathBuf),

    // Display already lists every problem; a source() would repeat them.
    #[error("{0}")]
    Invalid(ConfigDiagnostics),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// One problem found during validation, anchored to a config field.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub severity: Severity,
    pub field: FieldPath,
    pub message: String,
    pub hint: Option<String>,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, "\n    {} {hint}", paint("hint:", Style::new().yellow(), Stream::Stderr))?;
        }
        Ok(())
    }
}

/// Validation results across every section, reported together.
///
/// Warnings are printed on load; any error fails it.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<Diagnostic>,
    warnings: Vec<Diagnostic>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, severity: Severity, field: FieldPath, message: String, hint: Option<String>) {
        let diagnostic = Diagnostic {
            severity,
            field,
            message,
            hint,
        };
        match severity {
            Severity::Error => self.errors.push(diagnostic),
            Severity::Warning => self.warnings.push(diagnostic),
        }
    }

    pub fn error(&mut self, field: FieldPath, message: impl Into<String>) {
        self.push(Severity::Error, field, message.into(), None);
    }

    pub fn error_with_hint(
        &mut self,
        field: FieldPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.push(Severity::Error, field, message.into(), Some(hint.into()));
    }

    pub fn warn(&mut self, field: FieldPath, message: impl Into<String>) {
        self.push(Severity::Warning, field, message.into(), None);
    }

    pub fn print_warnings(&self) {
        for warning in &self.warnings {
            crate::log!("warning"; "{warning}");
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[Diagnostic] {
        &self.errors
    }

    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }

    /// `Err(self)` when at least one error was collected.
    pub fn into_result(self) -> Result<(), Self> {
        if self.has_errors() { Err(self) } else { Ok(()) }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = format!(
            "invalid configuration ({})",
            plural_count(self.errors.len(), "error")
        );
        write!(f, "{}", paint(title, Style::new().red().bold(), Stream::Stderr))?;
        for error in &self.errors {
            write!(f, "\n  {} {error}", paint("-", Style::new().red(), Stream::Stderr))?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}
