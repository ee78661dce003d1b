//! Project initialization.
//!
//! Writes a starter `swatch.toml` into the target directory.

mod config;

use crate::log;
use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};

pub use config::CONFIG_FILE;

/// Write a starter config into `dir` (created if missing).
///
/// Refuses to replace an existing config unless `force` is set.
pub fn init_project(dir: &Path, force: bool) -> Result<PathBuf> {
    let path = dir.join(CONFIG_FILE);
    if path.exists() && !force {
        bail!(
            "'{}' already exists (use --force to overwrite)",
            path.display()
        );
    }

    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory '{}'", dir.display()))?;
    config::write_config(dir)?;

    log!("init"; "wrote {}", path.display());
    Ok(path)
}
