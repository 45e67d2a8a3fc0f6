//! Canonicalization of free-text person names for comparison.

/// Normalize a raw name for matching.
///
/// - Trims and collapses internal whitespace runs to a single space
/// - Lowercases the whole string
/// - Strips periods and commas
/// - Expands `kr` to `kumar` and `prof` to `professor`; drops the
///   honorific `dr`
///
/// The result is deterministic and idempotent: normalizing an already
/// normalized name yields the same string. Empty or whitespace-only input
/// normalizes to the empty string.
pub fn normalize(raw: &str) -> String {
    let stripped: String = raw
        .to_lowercase()
        .chars()
        .filter(|ch| *ch != '.' && *ch != ',')
        .collect();
    stripped
        .split_whitespace()
        .filter_map(expand_token)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Token-level substitutions applied after punctuation stripping.
///
/// `dr` is removed, not translated; the roster writes it as an honorific.
fn expand_token(token: &str) -> Option<&str> {
    match token {
        "dr" => None,
        "kr" => Some("kumar"),
        "prof" => Some("professor"),
        other => Some(other),
    }
}
