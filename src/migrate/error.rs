//! Migration failure types.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A failure while migrating one rule or one file.
///
/// None of these abort a batch: rule-level failures mark the rule failed,
/// file-level failures are recorded as [`CopyFailure`]s.
#[derive(Debug, Error)]
pub enum MigrateError {
    #[error("source directory `{0}` does not exist")]
    SourceMissing(PathBuf),

    #[error("source `{0}` is not a directory")]
    NotADirectory(PathBuf),

    #[error("failed to read directory `{path}`")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to create directory `{path}`")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to copy `{from}` to `{to}`")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl MigrateError {
    /// Message including the underlying IO error, for summaries.
    pub fn reason(&self) -> String {
        match std::error::Error::source(self) {
            Some(source) => format!("{self}: {source}"),
            None => self.to_string(),
        }
    }
}

/// A file (or sub-directory) that could not be migrated.
#[derive(Debug)]
pub struct CopyFailure {
    /// Offending source path
    pub path: PathBuf,
    pub error: MigrateError,
}
