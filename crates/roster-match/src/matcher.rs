//! Tiered mentor resolution: exact key, fuzzy similarity, surname fallback.

use roster_model::Mentor;
use tracing::warn;

use crate::normalize::normalize;
use crate::score::similarity;

/// Ordered mentor lookup index keyed by normalized name.
///
/// Entries are sorted alphabetically by key so the fuzzy and fallback tiers
/// traverse candidates in a defined order rather than whatever order the
/// candidate pool happened to arrive in. Duplicate normalized keys keep the
/// first-seen mentor; later duplicates are shadowed with a warning.
#[derive(Debug, Clone)]
pub struct MentorIndex {
    entries: Vec<(String, Mentor)>,
}

impl MentorIndex {
    /// Build the index from a candidate pool, in pool order.
    pub fn build(mentors: &[Mentor]) -> Self {
        let mut entries: Vec<(String, Mentor)> = Vec::with_capacity(mentors.len());
        for mentor in mentors {
            let key = normalize(&mentor.name);
            if key.is_empty() {
                warn!(
                    mentor_id = %mentor.id,
                    name = %mentor.name,
                    "mentor name normalizes to empty, excluded from index"
                );
                continue;
            }
            if let Some((_, kept)) = entries.iter().find(|(existing, _)| *existing == key) {
                warn!(
                    key = %key,
                    kept_id = %kept.id,
                    shadowed_id = %mentor.id,
                    "duplicate normalized mentor name, keeping first-seen entry"
                );
                continue;
            }
            entries.push((key, mentor.clone()));
        }
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        Self { entries }
    }

    /// Exact lookup by normalized key.
    pub fn get(&self, key: &str) -> Option<&Mentor> {
        self.entries
            .binary_search_by(|(entry_key, _)| entry_key.as_str().cmp(key))
            .ok()
            .map(|index| &self.entries[index].1)
    }

    /// Entries in key order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Mentor)> {
        self.entries
            .iter()
            .map(|(key, mentor)| (key.as_str(), mentor))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolves a free-text mentor name against a [`MentorIndex`].
///
/// Tiers are tried in order and the first hit wins; there is no scoring
/// across tiers. Absence of a match is a normal outcome, never an error.
#[derive(Debug, Clone, Copy)]
pub struct MentorMatcher {
    threshold: f64,
}

impl MentorMatcher {
    /// Similarity a candidate must exceed in the fuzzy tier.
    pub const DEFAULT_THRESHOLD: f64 = 0.6;

    pub fn new() -> Self {
        Self {
            threshold: Self::DEFAULT_THRESHOLD,
        }
    }

    pub fn with_threshold(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Find the mentor a raw roster name refers to.
    ///
    /// 1. Exact: the normalized query equals an index key.
    /// 2. Fuzzy: first candidate in key order whose similarity to the query
    ///    exceeds the threshold.
    /// 3. Surname fallback: the query's last token (or its first four
    ///    characters, for tokens longer than four) appears as a substring of
    ///    a candidate key.
    pub fn find<'a>(&self, raw_name: &str, index: &'a MentorIndex) -> Option<&'a Mentor> {
        let query = normalize(raw_name);
        if query.is_empty() {
            return None;
        }

        if let Some(mentor) = index.get(&query) {
            return Some(mentor);
        }

        for (key, mentor) in index.entries() {
            if similarity(&query, key) > self.threshold {
                return Some(mentor);
            }
        }

        // Normalized queries are never empty here, so a last token exists.
        let surname = query.split_whitespace().next_back()?;
        let prefix: String = surname.chars().take(4).collect();
        let use_prefix = surname.chars().count() > 4;
        for (key, mentor) in index.entries() {
            if key.contains(surname) || (use_prefix && key.contains(prefix.as_str())) {
                return Some(mentor);
            }
        }

        None
    }
}

impl Default for MentorMatcher {
    fn default() -> Self {
        Self::new()
    }
}
