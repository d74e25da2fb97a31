//! Two-layer bucketed prefix index over the completion vocabulary.
//!
//! The vocabulary layer holds long-lived known symbols; the buffer layer holds
//! tokens of the active document and is replaced on every document switch.
//! Both layers bucket terms by their case-folded two-character prefix, so a
//! prefix query scans one bucket (or the few buckets sharing a first
//! character) instead of the whole vocabulary.
//!
//! Every lookup is total: absence of matches is an empty `Vec`.

mod fuzzy;
mod layer;

use tracing::{debug, debug_span};

use crate::settings::FuzzySettings;

use layer::BucketLayer;

pub(crate) use layer::{fold_case, starts_with_folded};

/// The two index partitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Vocabulary,
    Buffer,
}

/// Tuning for [`TermIndex::suggest_fuzzy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FuzzyOptions {
    /// Prefixes shorter than this (in chars) never match fuzzily.
    pub min_prefix_len: usize,
    /// Hard cap on the edit distance.
    pub max_distance: usize,
    /// Upper bound on terms scored per query.
    pub scan_limit: usize,
}

impl Default for FuzzyOptions {
    fn default() -> Self {
        Self {
            min_prefix_len: 3,
            max_distance: 2,
            scan_limit: 50_000,
        }
    }
}

impl FuzzyOptions {
    pub fn from_settings(s: &FuzzySettings) -> Self {
        Self {
            min_prefix_len: s.min_prefix_len,
            max_distance: s.max_distance,
            scan_limit: s.scan_limit,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerStats {
    pub terms: usize,
    pub buckets: usize,
    /// Key and size of the fullest bucket.
    pub largest_bucket: Option<(String, usize)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexStats {
    pub vocabulary: LayerStats,
    pub buffer: LayerStats,
}

#[derive(Default)]
pub struct TermIndex {
    vocabulary: BucketLayer,
    buffer: BucketLayer,
    fuzzy: FuzzyOptions,
}

impl TermIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fuzzy_options(fuzzy: FuzzyOptions) -> Self {
        Self {
            fuzzy,
            ..Self::default()
        }
    }

    pub fn fuzzy_options(&self) -> FuzzyOptions {
        self.fuzzy
    }

    fn layer(&self, layer: Layer) -> &BucketLayer {
        match layer {
            Layer::Vocabulary => &self.vocabulary,
            Layer::Buffer => &self.buffer,
        }
    }

    /// Add a term to a layer. Blank input is ignored; surrounding whitespace
    /// is trimmed. Returns `true` if the term was newly added.
    pub fn insert(&mut self, layer: Layer, term: &str) -> bool {
        let term = term.trim();
        if term.is_empty() {
            return false;
        }
        match layer {
            Layer::Vocabulary => self.vocabulary.insert(term),
            Layer::Buffer => self.buffer.insert(term),
        }
    }

    pub fn insert_vocabulary(&mut self, term: &str) -> bool {
        self.insert(Layer::Vocabulary, term)
    }

    pub fn insert_buffer(&mut self, term: &str) -> bool {
        self.insert(Layer::Buffer, term)
    }

    /// One-shot import of known symbols. Returns the number of new terms.
    pub fn seed_vocabulary<I, S>(&mut self, terms: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let _span = debug_span!("seed_vocabulary").entered();
        let mut added = 0;
        for term in terms {
            if self.insert_vocabulary(term.as_ref()) {
                added += 1;
            }
        }
        debug!(added, total = self.vocabulary.len(), "vocabulary seeded");
        added
    }

    /// Replace the buffer layer with the tokens of a newly active document.
    pub fn replace_buffer<I, S>(&mut self, tokens: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let _span = debug_span!("replace_buffer").entered();
        self.buffer.clear();
        let mut added = 0;
        for token in tokens {
            if self.insert_buffer(token.as_ref()) {
                added += 1;
            }
        }
        debug!(added, "buffer layer rebuilt");
        added
    }

    pub fn clear_buffer_layer(&mut self) {
        self.buffer.clear();
    }

    pub fn len(&self, layer: Layer) -> usize {
        self.layer(layer).len()
    }

    pub fn is_empty(&self) -> bool {
        self.vocabulary.len() == 0 && self.buffer.len() == 0
    }

    pub fn contains(&self, layer: Layer, term: &str) -> bool {
        self.layer(layer).contains(term)
    }

    pub fn stats(&self) -> IndexStats {
        let layer_stats = |l: &BucketLayer| LayerStats {
            terms: l.len(),
            buckets: l.bucket_count(),
            largest_bucket: l.largest_bucket().map(|(k, n)| (k.to_string(), n)),
        };
        IndexStats {
            vocabulary: layer_stats(&self.vocabulary),
            buffer: layer_stats(&self.buffer),
        }
    }

    /// Up to `limit` terms starting with `prefix`, in the order of
    /// [`prefix_matches`](Self::prefix_matches).
    pub fn suggest_prefix(&self, prefix: &str, limit: usize, case_sensitive: bool) -> Vec<String> {
        if limit == 0 {
            return Vec::new();
        }
        self.prefix_matches(prefix, case_sensitive)
            .take(limit)
            .map(str::to_string)
            .collect()
    }

    /// Every term starting with `prefix`. Blank prefixes match nothing.
    ///
    /// Vocabulary matches come first, then buffer matches. Within a layer,
    /// buckets are visited in key order and terms in insertion order. A
    /// buffer term identical to a vocabulary term is reported once. Only the
    /// buckets the prefix can reach are walked.
    pub fn prefix_matches<'a>(
        &'a self,
        prefix: &'a str,
        case_sensitive: bool,
    ) -> impl Iterator<Item = &'a str> + 'a {
        let folded = fold_case(prefix);
        let (vocabulary, buffer) = if prefix.trim().is_empty() {
            (Vec::new(), Vec::new())
        } else {
            (
                self.vocabulary.candidate_buckets(&folded),
                self.buffer.candidate_buckets(&folded),
            )
        };
        let buffer_only = buffer
            .into_iter()
            .flatten()
            .filter(move |t| !self.vocabulary.contains(t));
        vocabulary
            .into_iter()
            .flatten()
            .chain(buffer_only)
            .map(String::as_str)
            .filter(move |term| {
                if case_sensitive {
                    term.starts_with(prefix)
                } else {
                    starts_with_folded(term, &folded)
                }
            })
    }

    /// Every indexed term, vocabulary first, without cross-layer duplicates.
    fn all_terms(&self) -> impl Iterator<Item = &str> {
        self.vocabulary
            .iter()
            .chain(self.buffer.iter().filter(|t| !self.vocabulary.contains(t)))
    }
}
