mod coordinator;
mod dropdown;

use ac_core::{FuzzyOptions, Mode, PrefixSpan, TermIndex, Tokenizer};

use super::{CompletionConfig, CompletionCoordinator, KeyResponse, MemoryBuffer};

pub(super) const VOCABULARY: &[&str] = &[
    "instance",
    "instances",
    "subclass",
    "subrelation",
    "Animal",
    "Animate",
    "anchor",
    "agent",
    "alpha",
];

pub(super) fn test_config(mode: Mode) -> CompletionConfig {
    CompletionConfig {
        mode,
        min_prefix_len: 2,
        case_sensitive: false,
        allow_dot: false,
        ghost_max_display_chars: 60,
        dropdown_max_results: 20,
        fuzzy_fallback: true,
        fuzzy: FuzzyOptions::default(),
    }
}

pub(super) fn make_coordinator(mode: Mode) -> CompletionCoordinator {
    let mut coord = CompletionCoordinator::new(test_config(mode));
    coord.seed_vocabulary(VOCABULARY);
    coord
}

pub(super) fn make_index(terms: &[&str]) -> TermIndex {
    let mut index = TermIndex::new();
    index.seed_vocabulary(terms.iter().copied());
    index
}

/// Prefix ending at the end of `text`.
pub(super) fn span_at_end(text: &str) -> PrefixSpan {
    Tokenizer::default()
        .prefix_at(text, text.len())
        .expect("text must end in an identifier")
}

/// Type `s` one character at a time, notifying the coordinator after each.
pub(super) fn type_string(
    coord: &mut CompletionCoordinator,
    buf: &mut MemoryBuffer,
    s: &str,
) -> KeyResponse {
    let mut last = KeyResponse::not_consumed();
    for c in s.chars() {
        buf.insert(c.encode_utf8(&mut [0; 4]));
        last = coord.on_text_changed(buf);
    }
    last
}
