//! Stateful completion session: mode control, ghost and dropdown presenters,
//! and the coordinator that routes host events between them.
//!
//! `CompletionCoordinator` owns the term index and the presenters. The host
//! forwards text, caret and key events and renders the returned
//! `KeyResponse`.

pub(crate) mod types;

mod dropdown;
mod ghost;
mod hooks;
mod host;
mod key_handlers;
mod mode;
mod response;

#[cfg(test)]
mod tests;

use ac_core::settings::{settings, Settings};
use ac_core::{FuzzyOptions, Mode, PrefixSpan, TermIndex, Tokenizer};

pub use dropdown::DropdownPresenter;
pub use ghost::GhostPresenter;
pub use host::{MemoryBuffer, TextBuffer};
pub use mode::{ModeController, ModeListener};
pub use types::{DropdownAction, KeyEvent, KeyResponse};

use types::SessionState;

/// Per-instance configuration, usually taken from the global settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionConfig {
    pub mode: Mode,
    /// Prefixes shorter than this (in chars) do not start a session.
    pub min_prefix_len: usize,
    pub case_sensitive: bool,
    pub allow_dot: bool,
    pub ghost_max_display_chars: usize,
    pub dropdown_max_results: usize,
    pub fuzzy_fallback: bool,
    pub fuzzy: FuzzyOptions,
}

impl CompletionConfig {
    pub fn from_settings(s: &Settings) -> Self {
        Self {
            mode: s.completion.mode,
            min_prefix_len: s.completion.min_prefix_len,
            case_sensitive: s.completion.case_sensitive,
            allow_dot: s.tokenizer.allow_dot,
            ghost_max_display_chars: s.ghost.max_display_chars,
            dropdown_max_results: s.dropdown.max_results,
            fuzzy_fallback: s.dropdown.fuzzy_fallback,
            fuzzy: FuzzyOptions::from_settings(&s.fuzzy),
        }
    }
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self::from_settings(settings())
    }
}

/// Routes host events to at most one presenter per event and keeps the
/// buffer layer in step with the active document.
pub struct CompletionCoordinator {
    index: TermIndex,
    tokenizer: Tokenizer,
    min_prefix_len: usize,
    modes: ModeController,
    ghost: GhostPresenter,
    dropdown: DropdownPresenter,
    state: SessionState,
}

impl CompletionCoordinator {
    pub fn new(config: CompletionConfig) -> Self {
        Self::with_index(TermIndex::with_fuzzy_options(config.fuzzy), config)
    }

    /// Coordinator over an already populated index.
    pub fn with_index(index: TermIndex, config: CompletionConfig) -> Self {
        Self {
            index,
            tokenizer: Tokenizer::new(config.allow_dot),
            min_prefix_len: config.min_prefix_len,
            modes: ModeController::new(config.mode),
            ghost: GhostPresenter::new(
                config.ghost_max_display_chars,
                config.case_sensitive,
            ),
            dropdown: DropdownPresenter::new(
                config.dropdown_max_results,
                config.case_sensitive,
                config.fuzzy_fallback,
            ),
            state: SessionState::Idle,
        }
    }

    pub fn index(&self) -> &TermIndex {
        &self.index
    }

    pub fn index_mut(&mut self) -> &mut TermIndex {
        &mut self.index
    }

    pub fn tokenizer(&self) -> Tokenizer {
        self.tokenizer
    }

    /// Import known symbols into the vocabulary layer.
    pub fn seed_vocabulary<I, S>(&mut self, terms: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.index.seed_vocabulary(terms)
    }

    pub fn mode(&self) -> Mode {
        self.modes.mode()
    }

    /// Change the mode. Both presenters and the session are cleared before
    /// the listener is told.
    pub fn set_mode(&mut self, mode: Mode) -> KeyResponse {
        let resp = self.end_session();
        self.modes.set_mode(mode);
        resp
    }

    pub fn set_mode_listener(&mut self, listener: Box<dyn ModeListener>) {
        self.modes.set_listener(listener);
    }

    pub fn clear_mode_listener(&mut self) -> Option<Box<dyn ModeListener>> {
        self.modes.clear_listener()
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, SessionState::Active(_))
    }

    /// Prefix span of the running session.
    pub fn session_span(&self) -> Option<&PrefixSpan> {
        match &self.state {
            SessionState::Active(s) => Some(&s.span),
            SessionState::Idle => None,
        }
    }

    pub fn ghost(&self) -> &GhostPresenter {
        &self.ghost
    }

    pub fn dropdown(&self) -> &DropdownPresenter {
        &self.dropdown
    }
}
