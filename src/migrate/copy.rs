//! Recursive filtered copy (side effects).

use std::fs;
use std::path::Path;

use crate::filter::FileFilter;
use crate::utils::path::is_hidden;
use crate::{debug, log};

use super::{CopyFailure, MigrateError, Progress, RuleStats};

/// Shared state for one rule's walk.
pub(super) struct CopyContext<'a> {
    pub filter: &'a FileFilter,
    pub dry_run: bool,
    pub stats: RuleStats,
    pub progress: &'a mut Progress,
}

impl CopyContext<'_> {
    fn fail(&mut self, path: &Path, error: MigrateError) {
        log!("warning"; "{}", error.reason());
        self.stats.failures.push(CopyFailure {
            path: path.to_path_buf(),
            error,
        });
    }
}

/// Copy the filtered contents of `src_dir` into `dest_dir`, preserving
/// relative structure.
///
/// ```text
/// kit/icons/                 public/icons/
/// ├── .DS_Store      (hidden, ignored)
/// ├── add.svg        ─────→  ├── add.svg
/// ├── notes.txt      (filter: skipped)
/// └── brand/                 └── brand/
///     └── visa.svg   ─────→      └── visa.svg
/// ```
///
/// Only a failure to read `src_dir` itself is returned; anything deeper is
/// recorded in the context and the walk continues.
pub(super) fn copy_dir(
    src_dir: &Path,
    dest_dir: &Path,
    ctx: &mut CopyContext<'_>,
) -> Result<(), MigrateError> {
    let entries = fs::read_dir(src_dir).map_err(|source| MigrateError::ReadDir {
        path: src_dir.to_path_buf(),
        source,
    })?;

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(source) => {
                let error = MigrateError::ReadDir {
                    path: src_dir.to_path_buf(),
                    source,
                };
                ctx.fail(src_dir, error);
                continue;
            }
        };

        let file_name = entry.file_name();
        let src_path = entry.path();
        if is_hidden(&file_name) {
            debug!("migrate"; "ignoring hidden {}", src_path.display());
            continue;
        }

        let dest_path = dest_dir.join(&file_name);

        let file_type = match entry.file_type() {
            Ok(file_type) => file_type,
            Err(source) => {
                let error = MigrateError::ReadDir {
                    path: src_path.clone(),
                    source,
                };
                ctx.fail(&src_path, error);
                continue;
            }
        };

        // Directory links are not followed; a cycle would never end.
        if file_type.is_symlink() && src_path.is_dir() {
            debug!("migrate"; "not following directory link {}", src_path.display());
            continue;
        }

        if file_type.is_dir() {
            if let Err(error) = copy_dir(&src_path, &dest_path, ctx) {
                ctx.fail(&src_path, error);
            }
            continue;
        }

        if !ctx.filter.matches(&file_name.to_string_lossy()) {
            ctx.stats.skipped += 1;
            continue;
        }

        match copy_file(&src_path, &dest_path, ctx.dry_run) {
            Ok(()) => {
                ctx.stats.copied += 1;
                ctx.progress.tick();
            }
            Err(error) => {
                ctx.stats.skipped += 1;
                ctx.fail(&src_path, error);
            }
        }
    }

    Ok(())
}

/// Copy a single file, creating its destination directory on demand.
fn copy_file(src: &Path, dest: &Path, dry_run: bool) -> Result<(), MigrateError> {
    if dry_run {
        debug!("migrate"; "would copy {}", src.display());
        return Ok(());
    }

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(|source| MigrateError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::copy(src, dest).map_err(|source| MigrateError::Copy {
        from: src.to_path_buf(),
        to: dest.to_path_buf(),
        source,
    })?;
    Ok(())
}
