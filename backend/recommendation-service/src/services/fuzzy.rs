//! Fuzzy matching for catalog title search.
//!
//! Scores a partial query against every known title on a 0-100 scale and
//! keeps titles above a cutoff. Matching is substring-aware: the shorter
//! string is slid across the longer one and the best window similarity
//! wins, so "fond" still finds "Foundation".

use strsim::{jaro_winkler, normalized_levenshtein};

/// Case-insensitive partial-match score between `query` and `candidate`,
/// from 0 (unrelated) to 100 (contained or equal).
pub fn partial_match_score(query: &str, candidate: &str) -> f64 {
    let query = query.to_lowercase();
    let candidate = candidate.to_lowercase();
    if query.is_empty() || candidate.is_empty() {
        return 0.0;
    }

    // The shorter string is the needle; alignment windows come from the
    // longer one.
    let (needle, haystack) = if query.chars().count() <= candidate.chars().count() {
        (query, candidate)
    } else {
        (candidate, query)
    };

    if haystack.contains(&needle) {
        return 100.0;
    }

    let haystack_chars: Vec<char> = haystack.chars().collect();
    let needle_len = needle.chars().count();

    let mut best = similarity(&needle, &haystack);
    for start in 0..=(haystack_chars.len() - needle_len) {
        let window: String = haystack_chars[start..start + needle_len].iter().collect();
        best = best.max(similarity(&needle, &window));
    }

    best * 100.0
}

fn similarity(a: &str, b: &str) -> f64 {
    jaro_winkler(a, b).max(normalized_levenshtein(a, b))
}

/// Titles matching `query` with a score strictly above `cutoff`, at most
/// `limit` of them.
///
/// By default matches keep candidate iteration order, like the catalog
/// listing they filter; `ranked` sorts by descending score instead (ties
/// keep candidate order). An empty or whitespace query bypasses matching
/// and returns every candidate.
pub fn find_matches(
    query: &str,
    candidates: &[String],
    limit: usize,
    cutoff: f64,
    ranked: bool,
) -> Vec<String> {
    let query = query.trim();
    if query.is_empty() {
        return candidates.to_vec();
    }

    let mut matches: Vec<(String, f64)> = candidates
        .iter()
        .filter_map(|candidate| {
            let score = partial_match_score(query, candidate);
            (score > cutoff).then(|| (candidate.clone(), score))
        })
        .collect();

    if ranked {
        matches.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    }
    matches.truncate(limit);

    matches.into_iter().map(|(candidate, _)| candidate).collect()
}
