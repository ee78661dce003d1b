//! Configuration section definitions.
//!
//! Each module corresponds to a section in `swatch.toml`:
//!
//! | Module    | TOML Section                   | Purpose                       |
//! |-----------|--------------------------------|-------------------------------|
//! | `migrate` | `[migrate]`, `[[migrate.rules]]` | Copy rules source → dest      |
//! | `catalog` | `[catalog]`, `[[catalog.domains]]` | JSON catalog per asset domain |
//! | `filter`  | `filter = { ... }`             | Filename filters (shared)     |

mod catalog;
mod filter;
mod migrate;

pub use catalog::{CatalogConfig, DomainConfig, Layout};
pub use filter::FilterConfig;
pub use migrate::{MigrateConfig, RuleConfig};
