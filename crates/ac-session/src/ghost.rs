//! Ghost Presenter: inline preview of the best match's remainder.

use tracing::debug;

use ac_core::rank::{best_ghost_remainder, truncate_chars};
use ac_core::{Mode, PrefixSpan, TermIndex};

use crate::host::TextBuffer;

struct GhostState {
    span: PrefixSpan,
    /// Untruncated remainder; accept inserts all of it.
    remainder: String,
    display: String,
}

pub struct GhostPresenter {
    max_display_chars: usize,
    case_sensitive: bool,
    state: Option<GhostState>,
}

impl GhostPresenter {
    pub fn new(max_display_chars: usize, case_sensitive: bool) -> Self {
        Self {
            max_display_chars,
            case_sensitive,
            state: None,
        }
    }

    /// Recompute the overlay for the prefix ending at the caret.
    /// Returns whether an overlay is shown afterwards.
    pub fn refresh(&mut self, index: &TermIndex, mode: Mode, span: &PrefixSpan) -> bool {
        self.state = None;
        if !mode.ghost_enabled() || span.is_empty() {
            return false;
        }
        // Shortest over every match, not just the first few
        let candidates = index.prefix_matches(&span.text, self.case_sensitive);
        let best = best_ghost_remainder(&span.text, candidates);
        let Some(remainder) = best else {
            return false;
        };
        self.state = Some(GhostState {
            span: span.clone(),
            remainder: remainder.to_string(),
            display: truncate_chars(remainder, self.max_display_chars).to_string(),
        });
        true
    }

    /// Displayed remainder, if an overlay is up.
    pub fn text(&self) -> Option<&str> {
        self.state.as_ref().map(|s| s.display.as_str())
    }

    pub fn is_visible(&self) -> bool {
        self.state.is_some()
    }

    /// Drop the overlay. Returns whether one was showing.
    pub fn clear(&mut self) -> bool {
        self.state.take().is_some()
    }

    /// Write prefix + remainder over the typed prefix and move the caret to
    /// its end. Returns the inserted text, or `None` if nothing was accepted.
    pub fn accept(&mut self, mode: Mode, buffer: &mut dyn TextBuffer) -> Option<String> {
        if !mode.ghost_enabled() {
            return None;
        }
        let state = self.state.as_ref()?;
        let span = &state.span;
        if buffer.current_text().get(span.start..span.end) != Some(span.text.as_str()) {
            debug!(prefix = %span.text, "ghost prefix no longer in buffer");
            self.state = None;
            return None;
        }
        let completed = format!("{}{}", span.text, state.remainder);
        let (start, end) = (span.start, span.end);
        buffer.replace_range(start, end, &completed);
        buffer.caret_to(start + completed.len());
        self.state = None;
        Some(completed)
    }
}
