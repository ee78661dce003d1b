//! `swatch migrate`: run every copy rule and print the summary.

use anyhow::Result;

use crate::config::Config;
use crate::log;
use crate::migrate::{MigrateOptions, MigrationReport, MigrationRule, RuleOutcome, run_migrations};
use crate::utils::plural_count;

/// Run the migration batch.
///
/// Returns `Ok` whenever the batch ran, even if rules or files failed;
/// those only show up in the summary.
pub fn run_migrate(config: &Config, dry_run: bool) -> Result<MigrationReport> {
    let rules = config
        .migrate
        .rules
        .iter()
        .map(MigrationRule::from_config)
        .collect::<Result<Vec<_>, _>>()?;

    if rules.is_empty() {
        log!("migrate"; "no rules configured in {}", config.config_path.display());
    } else {
        let mode = if dry_run { " (dry run)" } else { "" };
        log!("migrate"; "running {}{}", plural_count(rules.len(), "rule"), mode);
    }

    let options = MigrateOptions {
        progress_interval: config.migrate.progress_interval,
        dry_run,
    };
    let report = run_migrations(&rules, &options);
    print_report(&report, config);
    Ok(report)
}

fn print_report(report: &MigrationReport, config: &Config) {
    for rule in &report.rules {
        match &rule.outcome {
            RuleOutcome::Completed(stats) => {
                log!(
                    "migrate";
                    "{}: {} copied, {} skipped ({} -> {})",
                    rule.name,
                    stats.copied,
                    stats.skipped,
                    rule.source.display(),
                    config.root_relative(&rule.dest).display()
                );
                if !stats.failures.is_empty() {
                    log!("warning"; "{}: {}", rule.name, plural_count(stats.failures.len(), "copy failure"));
                }
            }
            RuleOutcome::Failed(error) => {
                log!("error"; "{}: {}", rule.name, error.reason());
            }
        }
    }

    log!(
        "migrate";
        "{} succeeded, {} failed; {} copied, {} skipped in {:.2?}",
        plural_count(report.succeeded(), "rule"),
        report.failed(),
        plural_count(report.total_copied(), "file"),
        report.total_skipped(),
        report.duration
    );
}
