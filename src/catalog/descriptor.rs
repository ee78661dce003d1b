//! Asset descriptor and the string derivations behind it.
//!
//! Derivations are purely string-based and never fail; a filename with no
//! usable characters simply yields an empty id.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::utils::path::{join_url, to_slash};

/// Normalized record describing one asset file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetDescriptor {
    /// Slug of the file stem. Not guaranteed unique within a catalog.
    pub id: String,
    /// Human-readable title derived from the stem
    pub name: String,
    pub filename: String,
    /// Path below the scan root, `/`-separated
    pub relative_path: String,
    pub url: String,
    /// Lowercased extension without the dot, empty if none
    pub extension: String,
    /// Name of the directory directly containing the file
    pub category: String,
}

impl AssetDescriptor {
    /// Describe `path`, found under scan `root`, published below `url_prefix`.
    pub fn from_path(path: &Path, root: &Path, url_prefix: &str) -> Self {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let relative = path.strip_prefix(root).unwrap_or(path);
        let relative_path = to_slash(relative);
        let category = path
            .parent()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let (stem, extension) = split_filename(&filename);

        Self {
            id: slugify_id(stem),
            name: title_case(stem),
            url: join_url(url_prefix, &relative_path),
            extension,
            category,
            relative_path,
            filename,
        }
    }
}

/// Split at the last `.` into stem and lowercased extension.
///
/// `"Payment-Icon_VISA.svg"` -> `("Payment-Icon_VISA", "svg")`,
/// `"archive.tar.gz"` -> `("archive.tar", "gz")`, `"LICENSE"` -> `("LICENSE", "")`.
pub fn split_filename(filename: &str) -> (&str, String) {
    match filename.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => (stem, ext.to_ascii_lowercase()),
        _ => (filename, String::new()),
    }
}

/// Lowercase ASCII slug: runs of anything outside `[a-z0-9]` become one `-`,
/// with no leading or trailing `-`.
///
/// Non-ASCII letters are transliterated first (`"Café"` -> `"cafe"`).
pub fn slugify_id(stem: &str) -> String {
    let ascii = deunicode::deunicode(stem).to_ascii_lowercase();
    let mut slug = String::with_capacity(ascii.len());
    let mut pending_dash = false;

    for c in ascii.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// Title from a stem: `-`/`_` become spaces, each word capitalized.
///
/// `"Payment-Icon_VISA"` -> `"Payment Icon Visa"`
pub fn title_case(stem: &str) -> String {
    stem.split(['-', '_', ' '])
        .filter(|w| !w.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn is_valid_id(id: &str) -> bool {
        regex::Regex::new("^[a-z0-9-]*$").unwrap().is_match(id)
    }

    #[test]
    fn test_payment_icon_example() {
        let root = PathBuf::from("/assets/payment");
        let path = root.join("cards/Payment-Icon_VISA.svg");
        let desc = AssetDescriptor::from_path(&path, &root, "/assets/payment");

        assert_eq!(desc.id, "payment-icon-visa");
        assert_eq!(desc.name, "Payment Icon Visa");
        assert_eq!(desc.filename, "Payment-Icon_VISA.svg");
        assert_eq!(desc.relative_path, "cards/Payment-Icon_VISA.svg");
        assert_eq!(desc.url, "/assets/payment/cards/Payment-Icon_VISA.svg");
        assert_eq!(desc.extension, "svg");
        assert_eq!(desc.category, "cards");
    }

    #[test]
    fn test_category_of_root_level_file() {
        let root = PathBuf::from("/assets/icons");
        let desc = AssetDescriptor::from_path(&root.join("add.svg"), &root, "/icons/");
        assert_eq!(desc.category, "icons");
        assert_eq!(desc.url, "/icons/add.svg");
    }

    #[test]
    fn test_slugify_id() {
        assert_eq!(slugify_id("Payment-Icon_VISA"), "payment-icon-visa");
        assert_eq!(slugify_id("arrow  left (2)"), "arrow-left-2");
        assert_eq!(slugify_id("__edge__"), "edge");
        assert_eq!(slugify_id("archive.tar"), "archive-tar");
        assert_eq!(slugify_id("Café Crème"), "cafe-creme");
        assert_eq!(slugify_id("!!!"), "");
        assert_eq!(slugify_id(""), "");
    }

    #[test]
    fn test_ids_always_match_pattern() {
        for name in [
            "Payment-Icon_VISA.svg",
            "ÄÖÜ über.png",
            "  spaced   out .jpg",
            "---.svg",
            "emoji 🎨 palette.svg",
            "日本語.svg",
            "no-extension",
            "UPPER_case-Mixed.123.webp",
        ] {
            let (stem, _) = split_filename(name);
            let id = slugify_id(stem);
            assert!(is_valid_id(&id), "{name:?} produced {id:?}");
            assert!(!id.starts_with('-') && !id.ends_with('-'), "{id:?}");
            assert!(!id.contains("--"), "{id:?}");
        }
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("Payment-Icon_VISA"), "Payment Icon Visa");
        assert_eq!(title_case("arrow--left"), "Arrow Left");
        assert_eq!(title_case("über-cool"), "Über Cool");
        assert_eq!(title_case("x"), "X");
        assert_eq!(title_case("-"), "");
    }

    #[test]
    fn test_split_filename() {
        assert_eq!(split_filename("logo.SVG"), ("logo", "svg".to_string()));
        assert_eq!(split_filename("archive.tar.gz"), ("archive.tar", "gz".to_string()));
        assert_eq!(split_filename("LICENSE"), ("LICENSE", String::new()));
        assert_eq!(split_filename("trailing."), ("trailing", String::new()));
    }

    #[test]
    fn test_serializes_camel_case() {
        let root = PathBuf::from("/r");
        let desc = AssetDescriptor::from_path(&root.join("a/b.png"), &root, "/r");
        let json = serde_json::to_value(&desc).unwrap();
        assert_eq!(json["relativePath"], "a/b.png");
        assert!(json.get("relative_path").is_none());
    }
}
