//! Similarity scoring between a raw input value and a candidate program.
//!
//! Scores are integers 0..=100. Rules are tried in order, first match wins:
//!
//! 1. Normalized forms equal → 100.
//! 2. Normalized forms equal after stripping a trailing 4-digit year → 95.
//!    This makes cohort-tagged names ("Accounting 2024") line up with their
//!    base program ("Accounting") without claiming an exact match.
//! 3. Levenshtein distance over the normalized forms, scaled to 0..=100.

use rapidfuzz::distance::levenshtein;

use crate::normalize::normalize;

/// Similarity score between two strings, 0..=100.
///
/// The Levenshtein fallback uses unit costs over Unicode scalar values and
/// scores `round((max_len - distance) / max_len * 100)`, rounding half away
/// from zero. Both inputs empty scores 100; empty versus non-empty scores 0.
/// Symmetric in its arguments.
pub fn similarity(a: &str, b: &str) -> u8 {
    let norm_a = normalize(a);
    let norm_b = normalize(b);

    if norm_a == norm_b {
        return 100;
    }

    if strip_trailing_year(&norm_a) == strip_trailing_year(&norm_b) {
        return 95;
    }

    let max_len = norm_a.chars().count().max(norm_b.chars().count());
    if max_len == 0 {
        return 100;
    }

    let distance = levenshtein::distance(norm_a.chars(), norm_b.chars());
    // distance <= max_len with unit costs, so the ratio stays in [0, 1].
    (((max_len - distance) as f64 / max_len as f64) * 100.0).round() as u8
}

/// Strips a trailing 4-digit year token: when the last four characters are
/// all ASCII digits they are removed, then trailing whitespace is trimmed.
/// Longer digit runs lose only their last four digits.
fn strip_trailing_year(s: &str) -> &str {
    let bytes = s.as_bytes();
    if bytes.len() >= 4 && bytes[bytes.len() - 4..].iter().all(u8::is_ascii_digit) {
        s[..s.len() - 4].trim_end()
    } else {
        s
    }
}
