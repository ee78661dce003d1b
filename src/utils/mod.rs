//! Shared helpers with no side effects.

pub mod path;
mod plural;

pub use plural::plural_count;
