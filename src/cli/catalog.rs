//! `swatch catalog`: regenerate the JSON catalogs and print the summary.

use anyhow::Result;

use crate::catalog::{CatalogRun, run_catalogs};
use crate::config::Config;
use crate::utils::plural_count;
use crate::{debug, log};

/// Generate the selected domains (all when `domains` is empty).
pub fn run_catalog(config: &Config, domains: &[String]) -> Result<CatalogRun> {
    if config.catalog.domains.is_empty() {
        log!("catalog"; "no domains configured in {}", config.config_path.display());
    }

    let run = run_catalogs(&config.catalog, domains)?;
    print_run(&run, config);
    Ok(run)
}

fn print_run(run: &CatalogRun, config: &Config) {
    for domain in &run.domains {
        for dir in &domain.missing_sources {
            log!("warning"; "{}: source `{}` does not exist, skipped", domain.name, dir.display());
        }
        for collision in &domain.collisions {
            log!(
                "warning";
                "{}: id `{}` shared by {}",
                domain.name,
                collision.id,
                collision.relative_paths.join(", ")
            );
        }

        match &domain.error {
            Some(error) => log!("error"; "{}: {:#}", domain.name, error),
            None => {
                log!(
                    "catalog";
                    "{}: {} -> {}",
                    domain.name,
                    plural_count(domain.total, "asset"),
                    config.root_relative(&domain.output).display()
                );
            }
        }
    }

    debug!("catalog"; "output directory {}", config.catalog.output.display());
    log!(
        "catalog";
        "{} written, {} failed; {} in {:.2?}",
        plural_count(run.written(), "catalog"),
        run.failed(),
        plural_count(run.total_assets(), "asset"),
        run.duration
    );
}
