use tracing::{debug, debug_span};

use ac_core::PrefixSpan;

use super::types::{CompletionSession, KeyResponse, SessionState};
use super::{CompletionCoordinator, TextBuffer};

impl CompletionCoordinator {
    /// The host edited the document; the caret is where the edit left it.
    ///
    /// A token closed by the edit joins the buffer layer, then both
    /// presenters are refreshed for the prefix at the caret.
    pub fn on_text_changed(&mut self, buffer: &dyn TextBuffer) -> KeyResponse {
        let _span = debug_span!("on_text_changed").entered();
        let text = buffer.current_text();
        let caret = buffer.caret_offset();

        if let Some(token) = self.tokenizer.completed_token_before(text, caret) {
            if self.index.insert_buffer(token) {
                debug!(token, "buffer token added");
            }
        }

        if !self.modes.enabled() {
            return self.end_session();
        }
        match self.tokenizer.prefix_at(text, caret) {
            Some(span)
                if span.char_len() >= self.min_prefix_len
                    && !self.tokenizer.continues_at(text, caret) =>
            {
                self.refresh(span)
            }
            _ => self.end_session(),
        }
    }

    /// The caret moved without an edit. Anything but staying at the end of
    /// the session's prefix ends the session.
    pub fn on_caret_moved(&mut self, buffer: &dyn TextBuffer) -> KeyResponse {
        let caret = buffer.caret_offset();
        if self.session_span().is_some_and(|span| span.end == caret) {
            return KeyResponse::not_consumed();
        }
        self.end_session()
    }

    /// A different document became active: rebuild the buffer layer from it.
    pub fn on_document_switched(&mut self, buffer: &dyn TextBuffer) -> KeyResponse {
        let _span = debug_span!("on_document_switched").entered();
        let resp = self.end_session();
        let tokens = self.tokenizer.tokens(buffer.current_text());
        self.index.replace_buffer(tokens);
        resp
    }

    fn refresh(&mut self, span: PrefixSpan) -> KeyResponse {
        let mode = self.modes.mode();
        let ghost = self.ghost.refresh(&self.index, mode, &span);
        let dropdown = self.dropdown.refresh(&self.index, mode, &span);
        debug!(prefix = %span.text, ghost, dropdown, "presenters refreshed");

        if ghost || dropdown {
            self.state = SessionState::Active(CompletionSession { span });
        } else {
            // No known completion
            self.state = SessionState::Idle;
        }
        self.make_presentation_response()
    }
}
