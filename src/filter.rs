//! Compiled filename filters.
//!
//! A [`FileFilter`] is built once from a [`FilterConfig`] and consulted for
//! every non-hidden file the walkers visit. Hidden names never reach it.

use regex::Regex;

use crate::config::section::FilterConfig;

/// Predicate over a bare filename (no directory part).
#[derive(Debug, Clone, Default)]
pub struct FileFilter {
    /// Lowercased, dot-less extensions. Empty accepts any extension.
    extensions: Vec<String>,
    include: Option<Regex>,
    exclude: Option<Regex>,
}

impl FileFilter {
    /// Filter that accepts every filename.
    pub fn any() -> Self {
        Self::default()
    }

    /// Filter accepting only the given extensions (case-insensitive).
    pub fn extensions<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            extensions: extensions
                .into_iter()
                .map(|e| normalize_extension(e.as_ref()))
                .collect(),
            ..Self::default()
        }
    }

    pub fn with_include(mut self, include: Regex) -> Self {
        self.include = Some(include);
        self
    }

    pub fn with_exclude(mut self, exclude: Regex) -> Self {
        self.exclude = Some(exclude);
        self
    }

    /// Compile a filter from its config form.
    ///
    /// # Errors
    ///
    /// Returns the regex error when `include` or `exclude` does not compile.
    pub fn compile(config: &FilterConfig) -> Result<Self, regex::Error> {
        let mut filter = Self::extensions(&config.extensions);
        if let Some(pattern) = &config.include {
            filter = filter.with_include(Regex::new(pattern)?);
        }
        if let Some(pattern) = &config.exclude {
            filter = filter.with_exclude(Regex::new(pattern)?);
        }
        Ok(filter)
    }

    /// Whether `filename` passes every configured condition.
    pub fn matches(&self, filename: &str) -> bool {
        if !self.extensions.is_empty() {
            let Some((_, ext)) = filename.rsplit_once('.') else {
                return false;
            };
            let ext = ext.to_ascii_lowercase();
            if !self.extensions.iter().any(|e| *e == ext) {
                return false;
            }
        }
        if let Some(include) = &self.include
            && !include.is_match(filename)
        {
            return false;
        }
        if let Some(exclude) = &self.exclude
            && exclude.is_match(filename)
        {
            return false;
        }
        true
    }
}

fn normalize_extension(ext: &str) -> String {
    ext.trim_start_matches('.').to_ascii_lowercase()
}
