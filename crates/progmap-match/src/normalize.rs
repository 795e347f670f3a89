//! Text normalization for comparison.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Normalizes a string for comparison.
///
/// - Lowercases
/// - NFD-decomposes and drops combining marks ("México" → "mexico")
/// - Replaces underscores with spaces
/// - Collapses whitespace runs to single spaces and trims
///
/// Pure and deterministic; any valid UTF-8 input normalizes without error.
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase()
        .nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .map(|ch| if ch == '_' { ' ' } else { ch })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
