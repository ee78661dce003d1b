//! Configuration file generation.
//!
//! Creates a commented swatch.toml covering the usual asset domains.

use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Default config filename
pub const CONFIG_FILE: &str = "swatch.toml";

/// Starter domains: (name, key, layout, extensions)
const DOMAINS: &[(&str, &str, &str, &str)] = &[
    ("icons", "icons", "flat", r#""svg""#),
    ("charts", "charts", "flat", r#""svg", "png""#),
    ("backgrounds", "variants", "grouped", r#""jpg", "jpeg", "png", "webp""#),
    ("payment-logos", "logos", "flat", r#""svg", "png""#),
    ("social-logos", "categories", "grouped", r#""svg", "png""#),
];

/// Generate swatch.toml content with comments
pub fn generate_config_template() -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "# swatch configuration file (v{})\n",
        env!("CARGO_PKG_VERSION")
    ));
    out.push_str("# Relative paths resolve against this file's directory; `~` is expanded.\n\n");

    out.push_str("[migrate]\n");
    out.push_str("# Log a progress line every N copied files\n");
    out.push_str("progress_interval = 100\n\n");

    for (name, _, _, extensions) in DOMAINS {
        out.push_str("[[migrate.rules]]\n");
        out.push_str(&format!("name = \"{name}\"\n"));
        out.push_str(&format!("source = \"~/design-kit/{name}\"\n"));
        out.push_str(&format!("dest = \"public/assets/{name}\"\n"));
        out.push_str(&format!("filter = {{ extensions = [{extensions}] }}\n\n"));
    }

    out.push_str("[catalog]\n");
    out.push_str("# One JSON file per domain is written here\n");
    out.push_str("output = \"src/data/catalogs\"\n");
    out.push_str("version = \"1.0.0\"\n");

    for (name, key, layout, extensions) in DOMAINS {
        out.push_str("\n[[catalog.domains]]\n");
        out.push_str(&format!("name = \"{name}\"\n"));
        out.push_str(&format!("layout = \"{layout}\"\n"));
        out.push_str(&format!("key = \"{key}\"\n"));
        out.push_str(&format!(
            "sources = [{{ dir = \"public/assets/{name}\", url = \"/assets/{name}\" }}]\n"
        ));
        out.push_str(&format!("filter = {{ extensions = [{extensions}] }}\n"));
    }

    out
}

/// Write the default swatch.toml into `root`
pub fn write_config(root: &Path) -> Result<()> {
    let path = root.join(CONFIG_FILE);
    fs::write(&path, generate_config_template())
        .with_context(|| format!("Failed to write config file '{}'", path.display()))
}
