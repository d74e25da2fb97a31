use std::collections::{BTreeMap, HashSet};

/// Characters of the case-folded term that form its bucket key.
const BUCKET_KEY_CHARS: usize = 2;

/// Lowercase `s` one character at a time.
///
/// Unlike `str::to_lowercase` this has no context rules (final sigma), so
/// `fold(a + b) == fold(a) + fold(b)` and prefixes survive folding.
pub(crate) fn fold_case(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}

/// Whether `term` starts with an already folded prefix, ignoring case.
pub(crate) fn starts_with_folded(term: &str, folded_prefix: &str) -> bool {
    let mut folded = term.chars().flat_map(char::to_lowercase);
    folded_prefix.chars().all(|p| folded.next() == Some(p))
}

fn bucket_key(folded: &str) -> String {
    folded.chars().take(BUCKET_KEY_CHARS).collect()
}

/// One partition of the vocabulary: terms bucketed by their folded
/// two-character prefix, each bucket in insertion order.
#[derive(Default)]
pub(super) struct BucketLayer {
    buckets: BTreeMap<String, Vec<String>>,
    members: HashSet<String>,
}

impl BucketLayer {
    /// Returns `true` if the term was newly added.
    pub(super) fn insert(&mut self, term: &str) -> bool {
        if self.members.contains(term) {
            return false;
        }
        self.members.insert(term.to_string());
        self.buckets
            .entry(bucket_key(&fold_case(term)))
            .or_default()
            .push(term.to_string());
        true
    }

    pub(super) fn clear(&mut self) {
        self.buckets.clear();
        self.members.clear();
    }

    pub(super) fn contains(&self, term: &str) -> bool {
        self.members.contains(term)
    }

    pub(super) fn len(&self) -> usize {
        self.members.len()
    }

    pub(super) fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub(super) fn largest_bucket(&self) -> Option<(&str, usize)> {
        self.buckets
            .iter()
            .map(|(k, v)| (k.as_str(), v.len()))
            .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(a.0)))
    }

    /// Buckets that may hold terms starting with `folded_prefix`, in key order.
    ///
    /// A prefix that folds to two or more characters names exactly one bucket;
    /// a one-character prefix spans every bucket whose key starts with it.
    pub(super) fn candidate_buckets(&self, folded_prefix: &str) -> Vec<&[String]> {
        let key = bucket_key(folded_prefix);
        if key.chars().count() >= BUCKET_KEY_CHARS {
            return self
                .buckets
                .get(&key)
                .map(|b| vec![b.as_slice()])
                .unwrap_or_default();
        }
        self.buckets
            .range(key.clone()..)
            .take_while(|(k, _)| k.starts_with(key.as_str()))
            .map(|(_, b)| b.as_slice())
            .collect()
    }

    /// All terms, bucket by bucket.
    pub(super) fn iter(&self) -> impl Iterator<Item = &str> {
        self.buckets.values().flatten().map(String::as_str)
    }
}
