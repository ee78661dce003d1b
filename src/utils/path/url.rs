//! URL assembly for catalog entries.

use std::path::Path;

/// Render a relative path with `/` separators regardless of platform.
///
/// ```ignore
/// to_slash(Path::new("brand/visa.svg")) -> "brand/visa.svg"
/// ```
pub fn to_slash(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Join a URL prefix and a relative path with exactly one `/` between them.
///
/// # Examples
/// ```ignore
/// join_url("/assets/icons", "ui/add.svg")  -> "/assets/icons/ui/add.svg"
/// join_url("/assets/icons/", "ui/add.svg") -> "/assets/icons/ui/add.svg"
/// join_url("", "add.svg")                  -> "/add.svg"
/// ```
pub fn join_url(prefix: &str, relative: &str) -> String {
    let prefix = prefix.trim_end_matches('/');
    let relative = relative.trim_start_matches('/');
    format!("{prefix}/{relative}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("/assets/icons", "ui/add.svg"), "/assets/icons/ui/add.svg");
        assert_eq!(join_url("/assets/icons/", "ui/add.svg"), "/assets/icons/ui/add.svg");
        assert_eq!(join_url("/assets", "/add.svg"), "/assets/add.svg");
        assert_eq!(join_url("", "add.svg"), "/add.svg");
        assert_eq!(
            join_url("https://cdn.example.com/kit", "a.png"),
            "https://cdn.example.com/kit/a.png"
        );
    }

    #[test]
    fn test_to_slash() {
        let path = Path::new("brand").join("cards").join("visa.svg");
        assert_eq!(to_slash(&path), "brand/cards/visa.svg");
        assert_eq!(to_slash(Path::new("visa.svg")), "visa.svg");
    }
}
