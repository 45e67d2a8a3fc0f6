//! Edit-distance scoring between normalized names.
//!
//! Levenshtein distance comes from `rapidfuzz`; the similarity ratio on top
//! of it is the length-normalized form used by the matcher's fuzzy tier.

use rapidfuzz::distance::levenshtein;

/// Classic unit-cost Levenshtein edit distance over characters.
pub fn distance(a: &str, b: &str) -> usize {
    levenshtein::distance(a.chars(), b.chars())
}

/// Normalized similarity in `[0, 1]`.
///
/// Defined as `(max_len - distance) / max_len` over character counts.
/// Two empty strings are vacuously identical and score `1.0`; that is a
/// deliberate policy, not an accident of the formula.
pub fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    (max_len - distance(a, b)) as f64 / max_len as f64
}
