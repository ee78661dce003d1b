//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// swatch: migrate design-kit assets and generate their JSON catalogs
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(short = 'C', long, global = true, default_value = "swatch.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Copy files from source trees into the asset tree, per `[[migrate.rules]]`
    #[command(visible_alias = "m")]
    Migrate {
        /// Walk and count without writing anything
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// Scan asset directories and write one JSON catalog per domain
    #[command(visible_alias = "c")]
    Catalog {
        /// Only generate these domains (default: all)
        #[arg(value_name = "DOMAIN")]
        domains: Vec<String>,
    },

    /// Write a starter swatch.toml
    #[command(visible_alias = "i")]
    Init {
        /// Target directory (default: current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        dir: Option<PathBuf>,

        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },
}
