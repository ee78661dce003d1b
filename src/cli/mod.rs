//! Command-line interface module.

mod args;
pub mod catalog;
pub mod init;
pub mod migrate;

pub use args::{Cli, Commands};
