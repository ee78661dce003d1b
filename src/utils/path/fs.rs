//! Filesystem path handling.
//!
//! - `normalize_path` - absolute form (canonicalize + fallback)
//! - `expand_path` - tilde expansion + resolution against a root
//! - `is_hidden` - dot-file detection shared by both walkers

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to:
/// - Return as-is if already absolute
/// - Join with current directory if relative
///
/// Directories that do not exist yet (a migration destination, the
/// catalog output dir) take the fallback branch.
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Expand `~` and resolve a configured path against the project root.
///
/// ```ignore
/// expand_path(Path::new("~/kit/icons"), root)   -> /home/me/kit/icons
/// expand_path(Path::new("public/icons"), root)  -> {root}/public/icons
/// expand_path(Path::new("/abs/icons"), root)    -> /abs/icons
/// ```
pub fn expand_path(path: &Path, root: &Path) -> PathBuf {
    let expanded = match path.to_str() {
        Some(s) => PathBuf::from(shellexpand::tilde(s).into_owned()),
        None => path.to_path_buf(),
    };
    let full = if expanded.is_relative() {
        root.join(expanded)
    } else {
        expanded
    };
    normalize_path(&full)
}

/// Whether a directory entry name is hidden (starts with `.`).
#[inline]
pub fn is_hidden(name: &OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}
