//! Prefix-driven completion engine for ontology terms and predicate symbols.
//!
//! The engine keeps a two-layer term index (known vocabulary plus the tokens
//! of the active document) and offers completions as an inline ghost
//! remainder, a dropdown list, or both. See [`api::AcEngine`] for the
//! host-facing entry point.

pub mod api;
mod trace_init;

pub use ac_core::{dict, index, rank, settings, tokenize};
pub use ac_core::{FuzzyOptions, Mode, TermIndex, Tokenizer};
pub use ac_session::{
    CompletionConfig, CompletionCoordinator, DropdownAction, KeyEvent, KeyResponse,
    MemoryBuffer, ModeController, ModeListener, TextBuffer,
};
