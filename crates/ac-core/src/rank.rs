//! Ordering and trimming of retrieved candidates for display.

use std::cmp::Ordering;

use crate::index::{fold_case, starts_with_folded};

/// Case-insensitive comparison; ties broken by the raw bytes so the order is
/// total and stable across runs.
pub fn cmp_case_insensitive(a: &str, b: &str) -> Ordering {
    let fa = a.chars().flat_map(char::to_lowercase);
    let fb = b.chars().flat_map(char::to_lowercase);
    fa.cmp(fb).then_with(|| a.cmp(b))
}

/// Sort terms for the dropdown list.
pub fn sort_case_insensitive(terms: &mut [String]) {
    terms.sort_by(|a, b| cmp_case_insensitive(a, b));
}

/// What remains of `candidate` after the typed `prefix`, comparing
/// characters case-insensitively. `None` if the candidate does not start
/// with the prefix, or if the prefix ends partway through the lowercase form
/// of one candidate char (typed "i" against "İ", which folds to "i\u{307}").
pub fn strip_prefix_folded<'a>(candidate: &'a str, prefix: &str) -> Option<&'a str> {
    let folded = fold_case(prefix);
    if !starts_with_folded(candidate, &folded) {
        return None;
    }
    // Consume as many candidate chars as it takes to cover the folded prefix.
    // One char may lowercase to several, so count by folded length.
    let mut covered = 0;
    let target = folded.chars().count();
    for (i, c) in candidate.char_indices() {
        if covered == target {
            return Some(&candidate[i..]);
        }
        if covered > target {
            return None;
        }
        covered += c.to_lowercase().count();
    }
    (covered == target).then_some("")
}

/// Pick the ghost completion for `prefix`: the shortest candidate with a
/// non-empty remainder, the earliest one on ties. Returns the remainder.
pub fn best_ghost_remainder<'a, I>(prefix: &str, candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<(usize, &'a str)> = None;
    for candidate in candidates {
        let Some(rest) = strip_prefix_folded(candidate, prefix) else {
            continue;
        };
        if rest.is_empty() {
            continue;
        }
        let len = candidate.chars().count();
        if best.map_or(true, |(best_len, _)| len < best_len) {
            best = Some((len, rest));
        }
    }
    best.map(|(_, rest)| rest)
}

/// First `max_chars` characters of `s`.
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((i, _)) => &s[..i],
        None => s,
    }
}
