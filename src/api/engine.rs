use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, warn};

use ac_core::dict::read_term_file;
use ac_core::{IndexStats, Mode};
use ac_session::{
    CompletionConfig, CompletionCoordinator, KeyEvent, ModeListener, TextBuffer,
};

use super::types::convert_to_events;
use super::{AcError, AcKeyResponse};

/// Thread-safe completion engine.
///
/// Every call locks the coordinator for its duration, so index growth from
/// one thread never interleaves with a lookup on another.
///
/// The mode listener sits behind its own lock and is called after the
/// coordinator lock is released, so its callbacks may query the engine.
/// They must not call [`set_mode`](Self::set_mode) or the listener setters.
pub struct AcEngine {
    coordinator: Mutex<CompletionCoordinator>,
    listener: Mutex<Option<Box<dyn ModeListener>>>,
    case_sensitive: bool,
}

impl AcEngine {
    /// Engine configured from the global settings.
    pub fn new() -> Self {
        Self::with_config(CompletionConfig::default())
    }

    pub fn with_config(config: CompletionConfig) -> Self {
        let case_sensitive = config.case_sensitive;
        Self {
            coordinator: Mutex::new(CompletionCoordinator::new(config)),
            listener: Mutex::new(None),
            case_sensitive,
        }
    }

    fn lock(&self) -> MutexGuard<'_, CompletionCoordinator> {
        self.coordinator
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    // --- Vocabulary ---

    pub fn seed_vocabulary<I, S>(&self, terms: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.lock().seed_vocabulary(terms)
    }

    /// Add the terms of a user dictionary file to the vocabulary.
    pub fn try_load_user_dictionary(&self, path: &Path) -> Result<usize, AcError> {
        let terms = read_term_file(path)?;
        let added = self.seed_vocabulary(&terms);
        info!(path = %path.display(), added, "user dictionary loaded");
        Ok(added)
    }

    /// Like [`try_load_user_dictionary`](Self::try_load_user_dictionary) but
    /// never fails: problems are logged and the vocabulary is left as is.
    pub fn load_user_dictionary(&self, path: &Path) -> usize {
        match self.try_load_user_dictionary(path) {
            Ok(added) => added,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "user dictionary not loaded");
                0
            }
        }
    }

    // --- Host hooks ---

    pub fn handle_key(&self, event: KeyEvent, buffer: &mut dyn TextBuffer) -> AcKeyResponse {
        convert_to_events(self.lock().on_key(event, buffer))
    }

    pub fn text_changed(&self, buffer: &dyn TextBuffer) -> AcKeyResponse {
        convert_to_events(self.lock().on_text_changed(buffer))
    }

    pub fn caret_moved(&self, buffer: &dyn TextBuffer) -> AcKeyResponse {
        convert_to_events(self.lock().on_caret_moved(buffer))
    }

    pub fn document_switched(&self, buffer: &dyn TextBuffer) -> AcKeyResponse {
        convert_to_events(self.lock().on_document_switched(buffer))
    }

    // --- Mode ---

    pub fn mode(&self) -> Mode {
        self.lock().mode()
    }

    /// Change the mode, then tell the listener: `dismiss_transient_ui`
    /// first, `apply_mode` second.
    pub fn set_mode(&self, mode: Mode) -> AcKeyResponse {
        // Held across the callbacks so concurrent changes notify in order.
        // Lock order is always listener, then coordinator.
        let mut listener = self.listener.lock().unwrap_or_else(PoisonError::into_inner);
        let resp = self.lock().set_mode(mode);
        if let Some(l) = listener.as_mut() {
            debug!(%mode, "notifying mode listener");
            l.dismiss_transient_ui();
            l.apply_mode(mode);
        }
        convert_to_events(resp)
    }

    /// Register the listener, replacing any previous one.
    pub fn set_mode_listener(&self, listener: Box<dyn ModeListener>) {
        *self.listener.lock().unwrap_or_else(PoisonError::into_inner) = Some(listener);
    }

    pub fn clear_mode_listener(&self) -> Option<Box<dyn ModeListener>> {
        self.listener
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }

    // --- Queries ---

    pub fn suggest_prefix(&self, prefix: &str, limit: usize) -> Vec<String> {
        self.lock()
            .index()
            .suggest_prefix(prefix, limit, self.case_sensitive)
    }

    pub fn suggest_fuzzy(&self, prefix: &str, limit: usize) -> Vec<String> {
        self.lock().index().suggest_fuzzy(prefix, limit)
    }

    pub fn stats(&self) -> IndexStats {
        self.lock().index().stats()
    }
}

impl Default for AcEngine {
    fn default() -> Self {
        Self::new()
    }
}
