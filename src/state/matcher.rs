//! Candidate filtering.
//!
//! Case-insensitive substring containment, original candidate order,
//! capped at [`MAX_MATCHES`]. Recomputed from scratch for every query.

use crate::model::CandidateSet;

/// Maximum number of entries a match list may hold.
pub const MAX_MATCHES: usize = 6;

/// Compute the match list for `query`.
///
/// An empty query matches nothing. The query is not trimmed: a lone space
/// matches every multi-word candidate.
pub fn find_matches(candidates: &CandidateSet, query: &str) -> Vec<String> {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    candidates
        .iter()
        .filter(|candidate| candidate.to_lowercase().contains(&needle))
        .take(MAX_MATCHES)
        .map(str::to_string)
        .collect()
}
