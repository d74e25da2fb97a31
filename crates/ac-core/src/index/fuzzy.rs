//! Approximate prefix lookup.
//!
//! Terms are scored with a bounded restricted Damerau-Levenshtein (optimal
//! string alignment) distance between the folded query and the term's leading
//! substrings of length `n - 1`, `n` and `n + 1`, where `n` is the query
//! length. Comparing against a window rather than the whole term lets
//! "animl" match "animalistic" as cheaply as "animal".

use liblevenshtein::distance::transposition_distance;
use tracing::{debug, debug_span};

use super::{fold_case, TermIndex};

/// Leading `chars` characters of `s`.
fn char_prefix(s: &str, chars: usize) -> &str {
    s.char_indices().nth(chars).map_or(s, |(i, _)| &s[..i])
}

/// Smallest distance between `query` and any leading window of `term`
/// (lengths `n - 1`, `n`, `n + 1`, clamped to the term), if within `bound`.
/// Adjacent transpositions count as one edit.
fn window_distance(query: &str, term: &str, bound: usize) -> Option<usize> {
    let n = query.chars().count();
    let term_len = term.chars().count();
    (n.saturating_sub(1)..=n + 1)
        .map(|len| len.min(term_len))
        // Skip windows whose length gap alone exceeds the budget
        .filter(|len| len.abs_diff(n) <= bound)
        .map(|len| transposition_distance(query, char_prefix(term, len)))
        .filter(|&d| d <= bound)
        .min()
}

impl TermIndex {
    /// Edit budget for a query of `len` characters.
    fn fuzzy_threshold(&self, len: usize) -> usize {
        self.fuzzy.max_distance.min(len.saturating_sub(1) / 2)
    }

    /// Up to `limit` terms whose leading characters approximately match
    /// `prefix`, best first.
    ///
    /// Prefixes shorter than the configured minimum (3 by default) yield
    /// nothing. Ordering is distance, then term length, then byte order.
    pub fn suggest_fuzzy(&self, prefix: &str, limit: usize) -> Vec<String> {
        let prefix = prefix.trim();
        let query = fold_case(prefix);
        let query_len = query.chars().count();
        if limit == 0 || query_len < self.fuzzy.min_prefix_len {
            return Vec::new();
        }
        let _span = debug_span!("suggest_fuzzy", prefix, limit).entered();
        let bound = self.fuzzy_threshold(query_len);

        let mut scored: Vec<(usize, usize, &str)> = Vec::new();
        let mut window = String::with_capacity(prefix.len() + 4);
        for term in self.all_terms().take(self.fuzzy.scan_limit) {
            window.clear();
            window.extend(
                term.chars()
                    .flat_map(char::to_lowercase)
                    .take(query_len + 1),
            );
            if let Some(d) = window_distance(&query, &window, bound) {
                scored.push((d, term.chars().count(), term));
            }
        }

        scored.sort_unstable();
        scored.truncate(limit);
        debug!(bound, matches = scored.len(), "fuzzy lookup");
        scored.into_iter().map(|(_, _, t)| t.to_string()).collect()
    }
}
