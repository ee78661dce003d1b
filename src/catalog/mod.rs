//! Cataloger: scan asset trees and emit one JSON document per domain.
//!
//! Catalogs are regenerated wholesale on every run; a file removed from the
//! asset tree simply disappears from the next catalog.

mod descriptor;
mod document;
mod scan;

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Result, bail};
use rustc_hash::FxHashMap;

use crate::config::{CatalogConfig, DomainConfig, Layout};
use crate::filter::FileFilter;

pub use descriptor::AssetDescriptor;
pub use document::Catalog;
pub use scan::{ScanOptions, ScanSource, scan};

/// A named asset domain: its sources and how its document is shaped.
#[derive(Debug, Clone)]
pub struct Domain {
    pub name: String,
    pub layout: Layout,
    pub key: String,
    pub sources: Vec<ScanSource>,
    pub options: ScanOptions,
}

impl Domain {
    /// Build a domain from its (already normalized) config entry.
    pub fn from_config(config: &DomainConfig) -> Result<Self, regex::Error> {
        Ok(Self {
            name: config.name.clone(),
            layout: config.layout,
            key: config.key.clone(),
            sources: config
                .sources
                .iter()
                .map(|s| ScanSource {
                    dir: s.dir.clone(),
                    url: s.url.clone(),
                    limit: s.limit,
                })
                .collect(),
            options: ScanOptions {
                filter: FileFilter::compile(&config.filter)?,
                sorted: config.sorted,
            },
        })
    }

    /// Concatenated descriptors of every source, in declaration order.
    pub fn scan(&self) -> Vec<AssetDescriptor> {
        self.sources
            .iter()
            .flat_map(|source| scan(source, &self.options))
            .collect()
    }

    /// Source directories that do not exist.
    pub fn missing_sources(&self) -> Vec<&Path> {
        self.sources
            .iter()
            .map(|s| s.dir.as_path())
            .filter(|dir| !dir.is_dir())
            .collect()
    }
}

/// An id shared by more than one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdCollision {
    pub id: String,
    pub relative_paths: Vec<String>,
}

/// Report ids produced by more than one file, in first-seen order.
///
/// Collisions are left in the catalog; consumers keyed by id will see
/// duplicates.
pub fn find_id_collisions(descriptors: &[AssetDescriptor]) -> Vec<IdCollision> {
    let mut order: Vec<&str> = Vec::new();
    let mut seen: FxHashMap<&str, Vec<&str>> = FxHashMap::default();

    for desc in descriptors {
        let paths = seen.entry(desc.id.as_str()).or_insert_with(|| {
            order.push(desc.id.as_str());
            Vec::new()
        });
        paths.push(desc.relative_path.as_str());
    }

    order
        .into_iter()
        .filter_map(|id| {
            let paths = &seen[id];
            (paths.len() > 1).then(|| IdCollision {
                id: id.to_string(),
                relative_paths: paths.iter().map(|p| p.to_string()).collect(),
            })
        })
        .collect()
}

/// Outcome of generating one domain's catalog.
#[derive(Debug)]
pub struct DomainReport {
    pub name: String,
    pub output: PathBuf,
    pub total: usize,
    pub missing_sources: Vec<PathBuf>,
    pub collisions: Vec<IdCollision>,
    /// Set when the document could not be written.
    pub error: Option<anyhow::Error>,
}

/// Aggregate of a whole `catalog` run.
#[derive(Debug, Default)]
pub struct CatalogRun {
    pub domains: Vec<DomainReport>,
    pub duration: Duration,
}

impl CatalogRun {
    pub fn written(&self) -> usize {
        self.domains.iter().filter(|d| d.error.is_none()).count()
    }

    pub fn failed(&self) -> usize {
        self.domains.iter().filter(|d| d.error.is_some()).count()
    }

    pub fn total_assets(&self) -> usize {
        self.domains
            .iter()
            .filter(|d| d.error.is_none())
            .map(|d| d.total)
            .sum()
    }
}

/// Scan one domain and write its catalog to `output`.
pub fn generate(domain: &Domain, version: &str, output: &Path) -> DomainReport {
    let descriptors = domain.scan();
    let collisions = find_id_collisions(&descriptors);
    let catalog = Catalog::build(&domain.name, version, &domain.key, domain.layout, descriptors);

    DomainReport {
        name: domain.name.clone(),
        output: output.to_path_buf(),
        total: catalog.total,
        missing_sources: domain
            .missing_sources()
            .into_iter()
            .map(Path::to_path_buf)
            .collect(),
        collisions,
        error: catalog.write(output).err(),
    }
}

/// Generate every configured domain, or only those named in `only`.
///
/// Unknown names in `only` are rejected before anything is written; a
/// domain whose catalog cannot be written does not stop the others.
pub fn run_catalogs(config: &CatalogConfig, only: &[String]) -> Result<CatalogRun> {
    if let Some(unknown) = only.iter().find(|n| config.domain(n).is_none()) {
        bail!("unknown catalog domain `{unknown}`");
    }

    let started = Instant::now();
    let mut domains = Vec::new();
    for entry in &config.domains {
        if !only.is_empty() && !only.contains(&entry.name) {
            continue;
        }
        let domain = Domain::from_config(entry)?;
        domains.push(generate(&domain, &config.version, &config.output_path(entry)));
    }

    Ok(CatalogRun {
        domains,
        duration: started.elapsed(),
    })
}
