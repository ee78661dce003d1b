//! Asset directory scanning (pure, no side effects).

use std::fs;
use std::path::{Path, PathBuf};

use crate::debug;
use crate::filter::FileFilter;
use crate::utils::path::is_hidden;

use super::AssetDescriptor;

/// A scan root and the URL prefix it is published under.
#[derive(Debug, Clone)]
pub struct ScanSource {
    pub dir: PathBuf,
    pub url: String,
    /// Stop accepting entries once this many were collected.
    pub limit: Option<usize>,
}

impl ScanSource {
    pub fn new(dir: impl Into<PathBuf>, url: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            url: url.into(),
            limit: None,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    pub filter: FileFilter,
    /// Visit directory entries in name order instead of OS order.
    pub sorted: bool,
}

/// Describe every non-hidden file under `source.dir` accepted by the filter.
///
/// Depth-first; order follows directory reading order unless `sorted`.
/// A missing root yields an empty list.
///
/// ```text
/// public/assets/payment/     url = "/assets/payment"
/// ├── .DS_Store              (hidden, skipped)
/// ├── Visa.svg               -> /assets/payment/Visa.svg          category "payment"
/// └── wallets/
///     └── apple-pay.svg      -> /assets/payment/wallets/apple-pay.svg  category "wallets"
/// ```
pub fn scan(source: &ScanSource, options: &ScanOptions) -> Vec<AssetDescriptor> {
    if !source.dir.is_dir() {
        debug!("catalog"; "no directory at {}", source.dir.display());
        return vec![];
    }

    let mut results = Vec::new();
    scan_recursive(&mut results, &source.dir, source, options);
    results
}

fn is_full(results: &[AssetDescriptor], limit: Option<usize>) -> bool {
    limit.is_some_and(|limit| results.len() >= limit)
}

/// Recursive helper; returns early once the limit is reached.
fn scan_recursive(
    results: &mut Vec<AssetDescriptor>,
    dir: &Path,
    source: &ScanSource,
    options: &ScanOptions,
) {
    let Ok(entries) = fs::read_dir(dir) else {
        debug!("catalog"; "cannot read {}", dir.display());
        return;
    };

    let mut entries: Vec<_> = entries.flatten().collect();
    if options.sorted {
        entries.sort_by_key(|e| e.file_name());
    }

    for entry in entries {
        if is_full(results, source.limit) {
            return;
        }

        let name = entry.file_name();
        if is_hidden(&name) {
            continue;
        }

        let path = entry.path();
        let Ok(file_type) = entry.file_type() else {
            debug!("catalog"; "cannot stat {}", path.display());
            continue;
        };
        // Directory links are not followed, so a link cycle cannot
        // duplicate the tree.
        if file_type.is_symlink() && path.is_dir() {
            debug!("catalog"; "not following directory link {}", path.display());
        } else if file_type.is_dir() {
            scan_recursive(results, &path, source, options);
        } else if options.filter.matches(&name.to_string_lossy()) {
            results.push(AssetDescriptor::from_path(&path, &source.dir, &source.url));
        }
    }
}
