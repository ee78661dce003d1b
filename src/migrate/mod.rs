//! Migrator: copy filtered files from source trees into the asset tree.
//!
//! Rules run in order and never abort the batch. A rule whose source is
//! missing is reported as failed with zero copies; a file that cannot be
//! copied is recorded, counted as skipped, and the walk goes on.

mod copy;
mod error;
mod report;

use std::path::PathBuf;
use std::time::Instant;

use crate::config::RuleConfig;
use crate::filter::FileFilter;
use crate::utils::plural_count;
use crate::{debug, log};

pub use error::{CopyFailure, MigrateError};
pub use report::{MigrationReport, RuleOutcome, RuleReport, RuleStats};

use copy::{CopyContext, copy_dir};

/// Declarative copy rule: everything under `source` accepted by `filter`
/// lands at the same relative path under `dest`.
#[derive(Debug, Clone)]
pub struct MigrationRule {
    pub name: String,
    pub source: PathBuf,
    pub dest: PathBuf,
    pub filter: FileFilter,
}

impl MigrationRule {
    pub fn new(name: impl Into<String>, source: impl Into<PathBuf>, dest: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            dest: dest.into(),
            filter: FileFilter::any(),
        }
    }

    pub fn with_filter(mut self, filter: FileFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Build a rule from its (already normalized) config entry.
    pub fn from_config(config: &RuleConfig) -> Result<Self, regex::Error> {
        Ok(Self::new(&config.name, &config.source, &config.dest)
            .with_filter(FileFilter::compile(&config.filter)?))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MigrateOptions {
    /// Log a progress line every N successful copies across the batch.
    pub progress_interval: usize,
    /// Walk and count without touching the destination.
    pub dry_run: bool,
}

impl Default for MigrateOptions {
    fn default() -> Self {
        Self {
            progress_interval: 100,
            dry_run: false,
        }
    }
}

/// Batch-wide copy counter driving the periodic progress line.
#[derive(Debug)]
pub struct Progress {
    interval: usize,
    copied: usize,
    dry_run: bool,
}

impl Progress {
    pub fn new(interval: usize) -> Self {
        Self {
            interval: interval.max(1),
            copied: 0,
            dry_run: false,
        }
    }

    /// Report copies as hypothetical.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Count one copy. Returns true when a progress line was emitted.
    pub fn tick(&mut self) -> bool {
        self.copied += 1;
        if self.copied % self.interval == 0 {
            log!("migrate"; "{}", self.message());
            return true;
        }
        false
    }

    fn message(&self) -> String {
        if self.dry_run {
            format!("{} would be copied so far", plural_count(self.copied, "file"))
        } else {
            format!("{} copied so far", plural_count(self.copied, "file"))
        }
    }

    pub fn copied(&self) -> usize {
        self.copied
    }
}

/// Run one rule.
pub fn migrate_rule(
    rule: &MigrationRule,
    options: &MigrateOptions,
    progress: &mut Progress,
) -> RuleReport {
    let outcome = if !rule.source.exists() {
        RuleOutcome::Failed(MigrateError::SourceMissing(rule.source.clone()))
    } else if !rule.source.is_dir() {
        RuleOutcome::Failed(MigrateError::NotADirectory(rule.source.clone()))
    } else {
        debug!("migrate"; "{}: {} -> {}", rule.name, rule.source.display(), rule.dest.display());
        let mut ctx = CopyContext {
            filter: &rule.filter,
            dry_run: options.dry_run,
            stats: RuleStats::default(),
            progress,
        };
        match copy_dir(&rule.source, &rule.dest, &mut ctx) {
            Ok(()) => RuleOutcome::Completed(ctx.stats),
            Err(error) => RuleOutcome::Failed(error),
        }
    };

    RuleReport {
        name: rule.name.clone(),
        source: rule.source.clone(),
        dest: rule.dest.clone(),
        outcome,
    }
}

/// Run every rule in order and time the batch.
pub fn run_migrations(rules: &[MigrationRule], options: &MigrateOptions) -> MigrationReport {
    let started = Instant::now();
    let mut progress = Progress::new(options.progress_interval).with_dry_run(options.dry_run);

    let rules = rules
        .iter()
        .map(|rule| migrate_rule(rule, options, &mut progress))
        .collect();

    MigrationReport {
        rules,
        duration: started.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn write(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_missing_source_marks_rule_failed() {
        let dir = TempDir::new().unwrap();
        let rules = vec![
            MigrationRule::new("ghost", dir.path().join("nope"), dir.path().join("out")),
        ];

        let report = run_migrations(&rules, &MigrateOptions::default());
        let rule = &report.rules[0];
        assert!(rule.is_failed());
        assert_eq!(rule.copied(), 0);
        assert!(matches!(
            rule.outcome,
            RuleOutcome::Failed(MigrateError::SourceMissing(_))
        ));
        assert_eq!(report.failed(), 1);
        assert!(!dir.path().join("out").exists());
    }

    #[test]
    fn test_source_is_file_marks_rule_failed() {
        let dir = TempDir::new().unwrap();
        write(&dir.path().join("kit.svg"), "<svg/>");
        let rule = MigrationRule::new("file", dir.path().join("kit.svg"), dir.path().join("out"));

        let report = migrate_rule(&rule, &MigrateOptions::default(), &mut Progress::new(100));
        assert!(matches!(
            report.outcome,
            RuleOutcome::Failed(MigrateError::NotADirectory(_))
        ));
    }

    #[test]
    fn test_failed_rule_does_not_stop_batch() {
        let dir = TempDir::new().unwrap();
        let kit = dir.path().join("kit");
        write(&kit.join("add.svg"), "<svg/>");

        let rules = vec![
            MigrationRule::new("missing", dir.path().join("missing"), dir.path().join("a")),
            MigrationRule::new("icons", &kit, dir.path().join("b")),
        ];
        let report = run_migrations(&rules, &MigrateOptions::default());

        assert_eq!(report.succeeded(), 1);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.total_copied(), 1);
        assert!(dir.path().join("b/add.svg").exists());
    }

    #[test]
    fn test_copies_matching_and_skips_others() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("kit");
        write(&src.join("add.svg"), "<svg/>");
        write(&src.join("brand/visa.svg"), "<svg/>");
        write(&src.join("brand/deep/mastercard.SVG"), "<svg/>");
        write(&src.join("notes.txt"), "todo");
        write(&src.join("brand/preview.png"), "png");

        let dest = dir.path().join("public/icons");
        let rule = MigrationRule::new("icons", &src, &dest)
            .with_filter(FileFilter::extensions(["svg"]));
        let report = migrate_rule(&rule, &MigrateOptions::default(), &mut Progress::new(100));

        assert_eq!(report.copied(), 3);
        assert_eq!(report.skipped(), 2);
        assert!(report.failures().is_empty());
        assert_eq!(fs::read_to_string(dest.join("brand/visa.svg")).unwrap(), "<svg/>");
        assert!(dest.join("brand/deep/mastercard.SVG").exists());
        assert!(!dest.join("notes.txt").exists());
        assert!(!dest.join("brand/preview.png").exists());
    }

    #[test]
    fn test_hidden_entries_ignored_regardless_of_filter() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("kit");
        write(&src.join(".DS_Store"), "junk");
        write(&src.join(".cache/add.svg"), "<svg/>");
        write(&src.join(".hidden.svg"), "<svg/>");
        write(&src.join("visible.svg"), "<svg/>");

        let dest = dir.path().join("out");
        let rule = MigrationRule::new("all", &src, &dest);
        let report = migrate_rule(&rule, &MigrateOptions::default(), &mut Progress::new(100));

        assert_eq!(report.copied(), 1);
        assert_eq!(report.skipped(), 0);
        assert!(dest.join("visible.svg").exists());
        assert!(!dest.join(".DS_Store").exists());
        assert!(!dest.join(".hidden.svg").exists());
        assert!(!dest.join(".cache").exists());
    }

    #[test]
    fn test_empty_source_reports_zero() {
        let dir = TempDir::new().unwrap();
        let empty = dir.path().join("empty");
        fs::create_dir_all(&empty).unwrap();
        let kit = dir.path().join("kit");
        write(&kit.join("a.svg"), "<svg/>");

        let rules = vec![
            MigrationRule::new("empty", &empty, dir.path().join("out-empty")),
            MigrationRule::new("next", &kit, dir.path().join("out-next")),
        ];
        let report = run_migrations(&rules, &MigrateOptions::default());

        let empty = report.rule("empty").unwrap();
        assert!(!empty.is_failed());
        assert_eq!(empty.copied(), 0);
        assert_eq!(empty.skipped(), 0);
        assert_eq!(report.rule("next").unwrap().copied(), 1);
    }

    #[test]
    fn test_dry_run_counts_without_writing() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("kit");
        write(&src.join("a.svg"), "<svg/>");
        write(&src.join("b/c.svg"), "<svg/>");
        write(&src.join("d.txt"), "");

        let dest = dir.path().join("out");
        let rule = MigrationRule::new("dry", &src, &dest).with_filter(FileFilter::extensions(["svg"]));
        let options = MigrateOptions {
            dry_run: true,
            ..MigrateOptions::default()
        };
        let report = migrate_rule(&rule, &options, &mut Progress::new(100));

        assert_eq!(report.copied(), 2);
        assert_eq!(report.skipped(), 1);
        assert!(!dest.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_copy_failure_is_recorded_and_skipped() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let src = dir.path().join("kit");
        write(&src.join("ok.svg"), "<svg/>");
        write(&src.join("locked.svg"), "<svg/>");
        fs::set_permissions(src.join("locked.svg"), fs::Permissions::from_mode(0o000)).unwrap();

        if fs::read(src.join("locked.svg")).is_ok() {
            eprintln!("skipped: permission bits are not enforced for this user (root?)");
            return;
        }

        let dest = dir.path().join("out");
        let rule = MigrationRule::new("perm", &src, &dest);
        let report = migrate_rule(&rule, &MigrateOptions::default(), &mut Progress::new(100));

        assert!(!report.is_failed());
        assert_eq!(report.copied(), 1);
        assert_eq!(report.skipped(), 1);
        assert_eq!(report.failures().len(), 1);
        assert!(report.failures()[0].path.ends_with("locked.svg"));
        assert!(matches!(report.failures()[0].error, MigrateError::Copy { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_subdirectory_is_recorded() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let src = dir.path().join("kit");
        write(&src.join("a.svg"), "<svg/>");
        write(&src.join("locked/hidden-from-us.svg"), "<svg/>");
        write(&src.join("open/b.svg"), "<svg/>");
        let locked = src.join("locked");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            eprintln!("skipped: permission bits are not enforced for this user (root?)");
            return;
        }

        let dest = dir.path().join("out");
        let rule = MigrationRule::new("partial", &src, &dest);
        let report = migrate_rule(&rule, &MigrateOptions::default(), &mut Progress::new(100));
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        assert!(matches!(report.outcome, RuleOutcome::Completed(_)));
        assert_eq!(report.copied(), 2);
        assert_eq!(report.failures().len(), 1);
        assert_eq!(report.failures()[0].path, locked);
        assert!(matches!(report.failures()[0].error, MigrateError::ReadDir { .. }));
        assert!(dest.join("a.svg").exists());
        assert!(dest.join("open/b.svg").exists());
        assert!(!dest.join("locked").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_directory_links_are_not_followed() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("kit");
        write(&src.join("ui/add.svg"), "<svg/>");
        std::os::unix::fs::symlink(&src, src.join("ui/loop")).unwrap();
        std::os::unix::fs::symlink(src.join("ui/add.svg"), src.join("plus.svg")).unwrap();

        let dest = dir.path().join("out");
        let rule = MigrationRule::new("links", &src, &dest);
        let report = migrate_rule(&rule, &MigrateOptions::default(), &mut Progress::new(100));

        assert!(!report.is_failed());
        assert_eq!(report.copied(), 2);
        assert!(report.failures().is_empty());
        assert!(dest.join("ui/add.svg").is_file());
        assert!(dest.join("plus.svg").is_file());
        assert!(!dest.join("ui/loop").exists());
    }

    #[test]
    fn test_progress_message_in_dry_run() {
        let mut progress = Progress::new(2).with_dry_run(true);
        progress.tick();
        progress.tick();
        assert_eq!(progress.message(), "2 files would be copied so far");

        let mut progress = Progress::new(2);
        progress.tick();
        assert_eq!(progress.message(), "1 file copied so far");
    }

    #[test]
    fn test_progress_ticks_every_interval() {
        let mut progress = Progress::new(3);
        let emitted: Vec<bool> = (0..7).map(|_| progress.tick()).collect();
        assert_eq!(emitted, vec![false, false, true, false, false, true, false]);
        assert_eq!(progress.copied(), 7);

        // Zero interval is clamped rather than dividing by zero.
        let mut progress = Progress::new(0);
        assert!(progress.tick());
    }

    #[test]
    fn test_progress_spans_rules() {
        let dir = TempDir::new().unwrap();
        for (i, name) in ["a", "b"].iter().enumerate() {
            for j in 0..3 {
                write(&dir.path().join(name).join(format!("{i}-{j}.svg")), "");
            }
        }
        let rules = vec![
            MigrationRule::new("a", dir.path().join("a"), dir.path().join("out/a")),
            MigrationRule::new("b", dir.path().join("b"), dir.path().join("out/b")),
        ];
        let options = MigrateOptions {
            progress_interval: 4,
            dry_run: true,
        };
        let mut progress = Progress::new(options.progress_interval);
        for rule in &rules {
            migrate_rule(rule, &options, &mut progress);
        }
        assert_eq!(progress.copied(), 6);
    }

    #[test]
    fn test_rule_from_config() {
        let config = RuleConfig {
            name: "logos".into(),
            source: PathBuf::from("/kit/logos"),
            dest: PathBuf::from("/public/logos"),
            filter: crate::config::section::FilterConfig {
                extensions: vec!["svg".into()],
                include: None,
                exclude: Some("^_".into()),
            },
        };
        let rule = MigrationRule::from_config(&config).unwrap();
        assert_eq!(rule.name, "logos");
        assert!(rule.filter.matches("visa.svg"));
        assert!(!rule.filter.matches("_draft.svg"));
    }
}
