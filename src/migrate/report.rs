//! Per-rule and batch outcomes.

use std::path::PathBuf;
use std::time::Duration;

use super::{CopyFailure, MigrateError};

/// Counters for a rule whose source directory was walked.
#[derive(Debug, Default)]
pub struct RuleStats {
    pub copied: usize,
    /// Files rejected by the filter plus files whose copy failed.
    pub skipped: usize,
    pub failures: Vec<CopyFailure>,
}

/// Result of running one rule.
#[derive(Debug)]
pub enum RuleOutcome {
    Completed(RuleStats),
    /// The rule never started copying (missing or unreadable source).
    Failed(MigrateError),
}

#[derive(Debug)]
pub struct RuleReport {
    pub name: String,
    pub source: PathBuf,
    pub dest: PathBuf,
    pub outcome: RuleOutcome,
}

impl RuleReport {
    pub fn is_failed(&self) -> bool {
        matches!(self.outcome, RuleOutcome::Failed(_))
    }

    pub fn copied(&self) -> usize {
        match &self.outcome {
            RuleOutcome::Completed(stats) => stats.copied,
            RuleOutcome::Failed(_) => 0,
        }
    }

    pub fn skipped(&self) -> usize {
        match &self.outcome {
            RuleOutcome::Completed(stats) => stats.skipped,
            RuleOutcome::Failed(_) => 0,
        }
    }

    pub fn failures(&self) -> &[CopyFailure] {
        match &self.outcome {
            RuleOutcome::Completed(stats) => &stats.failures,
            RuleOutcome::Failed(_) => &[],
        }
    }
}

/// Aggregate of a whole `migrate` run.
#[derive(Debug, Default)]
pub struct MigrationReport {
    pub rules: Vec<RuleReport>,
    /// Wall-clock time of the batch
    pub duration: Duration,
}

impl MigrationReport {
    /// Number of rules that completed (possibly with per-file failures).
    pub fn succeeded(&self) -> usize {
        self.rules.iter().filter(|r| !r.is_failed()).count()
    }

    pub fn failed(&self) -> usize {
        self.rules.iter().filter(|r| r.is_failed()).count()
    }

    pub fn total_copied(&self) -> usize {
        self.rules.iter().map(RuleReport::copied).sum()
    }

    pub fn total_skipped(&self) -> usize {
        self.rules.iter().map(RuleReport::skipped).sum()
    }

    pub fn rule(&self, name: &str) -> Option<&RuleReport> {
        self.rules.iter().find(|r| r.name == name)
    }
}
