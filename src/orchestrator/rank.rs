//! Two-tier suggestion ranking with stable order and first-wins dedup.
//!
//! Tier 1: suggestions whose keyword contains the normalised query
//! (case-insensitive substring). Tier 2: everything else the backend
//! returned as loosely related. Source order is preserved within each
//! tier; no secondary sort key.

use std::collections::HashSet;

use crate::types::SuggestionKeyword;

/// Rank, deduplicate, and truncate suggestion keywords for `query`.
///
/// # Pipeline
///
/// 1. Partition into tier 1 (substring match against the trimmed,
///    lowercased query) and tier 2, preserving source order in both
/// 2. Concatenate tier 1 then tier 2
/// 3. Deduplicate by exact (case-sensitive) keyword, keeping the first
///    occurrence — which by construction is the highest-ranked one
/// 4. Truncate to `max_count`
pub fn rank_suggestions(
    suggestions: Vec<SuggestionKeyword>,
    query: &str,
    max_count: usize,
) -> Vec<SuggestionKeyword> {
    let needle = query.trim().to_lowercase();
    let (tier1, tier2): (Vec<_>, Vec<_>) = suggestions
        .into_iter()
        .partition(|s| s.keyword.to_lowercase().contains(&needle));

    let mut seen: HashSet<String> = HashSet::new();
    tier1
        .into_iter()
        .chain(tier2)
        .filter(|s| seen.insert(s.keyword.clone()))
        .take(max_count)
        .collect()
}
