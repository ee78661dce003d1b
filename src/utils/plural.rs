//! Count formatting for summary lines.

/// Format a count with its noun, pluralized with a trailing `s`.
///
/// - `plural_count(0, "file")` -> `"0 files"`
/// - `plural_count(1, "rule")` -> `"1 rule"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{count} {noun}{suffix}")
}
