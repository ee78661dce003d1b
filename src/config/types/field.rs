//! Dotted config field paths.

use crate::logger::paint;
use owo_colors::{Stream, Style};
use std::fmt;

/// Where a diagnostic points, e.g. `catalog.domains`.
///
/// ```ignore
/// diag.error(MigrateConfig::RULES, "[0] rule name is empty");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(&'static str);

impl FieldPath {
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quoted = format!("`{}`", self.0);
        write!(f, "{}", paint(quoted, Style::new().cyan(), Stream::Stderr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_quotes_path() {
        owo_colors::set_override(false);
        let field = FieldPath::new("migrate.progress_interval");
        assert_eq!(field.to_string(), "`migrate.progress_interval`");
        assert_eq!(field.as_str(), "migrate.progress_interval");
    }
}
