//! Dropdown Presenter: ranked, navigable candidate list.

use tracing::debug;

use ac_core::rank::sort_case_insensitive;
use ac_core::{Mode, PrefixSpan, TermIndex};

use crate::host::TextBuffer;

struct DropdownState {
    span: PrefixSpan,
    items: Vec<String>,
    selected: usize,
    /// Items came from fuzzy lookup and keep distance order.
    fuzzy: bool,
}

pub struct DropdownPresenter {
    max_results: usize,
    case_sensitive: bool,
    fuzzy_fallback: bool,
    state: Option<DropdownState>,
}

impl DropdownPresenter {
    pub fn new(max_results: usize, case_sensitive: bool, fuzzy_fallback: bool) -> Self {
        Self {
            max_results,
            case_sensitive,
            fuzzy_fallback,
            state: None,
        }
    }

    /// Rebuild the list for the prefix ending at the caret.
    /// Returns whether the list is visible afterwards.
    pub fn refresh(&mut self, index: &TermIndex, mode: Mode, span: &PrefixSpan) -> bool {
        self.state = None;
        if !mode.dropdown_enabled() || span.is_empty() {
            return false;
        }
        let mut items = index.suggest_prefix(&span.text, self.max_results, self.case_sensitive);
        let mut fuzzy = false;
        if items.is_empty() && self.fuzzy_fallback {
            items = index.suggest_fuzzy(&span.text, self.max_results);
            fuzzy = true;
        }
        items.retain(|t| *t != span.text);
        if items.is_empty() {
            return false;
        }
        if !fuzzy {
            sort_case_insensitive(&mut items);
        }
        debug!(prefix = %span.text, count = items.len(), fuzzy, "dropdown refreshed");
        self.state = Some(DropdownState {
            span: span.clone(),
            items,
            selected: 0,
            fuzzy,
        });
        true
    }

    pub fn is_visible(&self) -> bool {
        self.state.is_some()
    }

    pub fn items(&self) -> &[String] {
        self.state
            .as_ref()
            .map(|s| s.items.as_slice())
            .unwrap_or_default()
    }

    pub fn selected(&self) -> Option<usize> {
        self.state.as_ref().map(|s| s.selected)
    }

    pub fn selected_item(&self) -> Option<&str> {
        let s = self.state.as_ref()?;
        s.items.get(s.selected).map(String::as_str)
    }

    /// Whether the current list came from the fuzzy fallback.
    pub fn is_fuzzy(&self) -> bool {
        self.state.as_ref().is_some_and(|s| s.fuzzy)
    }

    /// Move the selection by `delta`, clamped to the list.
    /// Returns `false` when the list is hidden.
    pub fn move_selection(&mut self, delta: isize) -> bool {
        let Some(s) = self.state.as_mut() else {
            return false;
        };
        let last = s.items.len().saturating_sub(1);
        s.selected = s.selected.saturating_add_signed(delta).min(last);
        true
    }

    /// Hide the list. Returns whether it was visible.
    pub fn hide(&mut self) -> bool {
        self.state.take().is_some()
    }

    /// Replace the typed prefix with the selected item and move the caret to
    /// its end. Returns the inserted term, or `None` if nothing was accepted.
    pub fn accept(&mut self, mode: Mode, buffer: &mut dyn TextBuffer) -> Option<String> {
        if !mode.dropdown_enabled() {
            return None;
        }
        let state = self.state.as_ref()?;
        let term = state.items.get(state.selected)?.clone();
        let span = &state.span;
        if buffer.current_text().get(span.start..span.end) != Some(span.text.as_str()) {
            debug!(prefix = %span.text, "dropdown prefix no longer in buffer");
            self.state = None;
            return None;
        }
        let start = span.start;
        buffer.replace_range(start, span.end, &term);
        buffer.caret_to(start + term.len());
        self.state = None;
        Some(term)
    }
}
