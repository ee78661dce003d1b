//! Path and URL utilities.
//!
//! - [`fs`]: filesystem path handling (`normalize_path`, `expand_path`, `is_hidden`)
//! - [`url`]: URL assembly for catalog entries (`join_url`, `to_slash`)

pub mod fs;
pub mod url;

pub use fs::{expand_path, is_hidden, normalize_path};
pub use url::{join_url, to_slash};
