//! Configuration utility types.
//!
//! | Module   | Purpose                                  |
//! |----------|------------------------------------------|
//! | `error`  | Load errors and validation diagnostics   |
//! | `field`  | Field paths used in diagnostics          |

mod error;
mod field;

pub use error::{ConfigDiagnostics, ConfigError};
pub use field::FieldPath;
