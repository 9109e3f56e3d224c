//! Keyword similarity scoring for artifact entries.
//!
//! Scores are normalized Levenshtein similarities in `[0, 1]`: identical
//! strings score 1.0, completely dissimilar strings score near 0.0, and the
//! score decreases monotonically with edit distance. Matching is
//! case-insensitive.

use strsim::normalized_levenshtein;

use crate::models::Entry;

/// Aggregate relevance of an entry for a set of keywords: the maximum
/// similarity any keyword reaches against the entry's name or one of its own
/// keyword tags. An empty keyword set scores 0.0.
pub fn keyword_score(entry: &Entry, keywords: &[String]) -> f64 {
    keywords.iter().map(|keyword| best_similarity(entry, keyword)).fold(0.0, f64::max)
}

fn best_similarity(entry: &Entry, keyword: &str) -> f64 {
    let keyword = keyword.to_lowercase();
    let mut best = normalized_levenshtein(&entry.name.to_lowercase(), &keyword);
    for tag in &entry.keywords {
        best = best.max(normalized_levenshtein(&tag.to_lowercase(), &keyword));
    }
    best
}
