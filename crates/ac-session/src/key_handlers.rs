use tracing::{debug, debug_span};

use super::types::{DropdownAction, KeyEvent, KeyResponse};
use super::{CompletionCoordinator, TextBuffer};

impl CompletionCoordinator {
    /// Route a key to at most one presenter.
    ///
    /// | key | handled by | consumed when |
    /// |---|---|---|
    /// | `GhostAccept` | ghost | ghost accepted |
    /// | `Commit` | dropdown, only while visible | dropdown accepted |
    /// | `ArrowUp` / `ArrowDown` | dropdown | list visible |
    /// | `Escape` | every visible presenter | anything dismissed |
    /// | `Other` | nobody | never |
    pub fn on_key(&mut self, event: KeyEvent, buffer: &mut dyn TextBuffer) -> KeyResponse {
        let _span = debug_span!("on_key", ?event).entered();

        match event {
            KeyEvent::GhostAccept => self.handle_ghost_accept(buffer),
            KeyEvent::Commit => self.handle_commit(buffer),
            KeyEvent::ArrowUp => self.handle_navigate(-1),
            KeyEvent::ArrowDown => self.handle_navigate(1),
            KeyEvent::Escape => self.handle_escape(),
            KeyEvent::Other => KeyResponse::not_consumed(),
        }
    }

    /// The session's prefix is no longer in the buffer where it was typed.
    fn session_is_stale(&self, buffer: &dyn TextBuffer) -> bool {
        self.session_span().is_some_and(|span| {
            buffer.current_text().get(span.start..span.end) != Some(span.text.as_str())
        })
    }

    /// Accept hit a stale prefix: nothing is written, both presentations go.
    fn end_stale_session(&mut self) -> KeyResponse {
        debug!("session prefix edited away, accept refused");
        self.end_session()
    }

    fn handle_ghost_accept(&mut self, buffer: &mut dyn TextBuffer) -> KeyResponse {
        if self.ghost.is_visible() && self.session_is_stale(buffer) {
            return self.end_stale_session();
        }
        let mode = self.modes.mode();
        match self.ghost.accept(mode, buffer) {
            Some(inserted) => self.make_accept_response(inserted),
            None => KeyResponse::not_consumed(),
        }
    }

    fn handle_commit(&mut self, buffer: &mut dyn TextBuffer) -> KeyResponse {
        if self.dropdown.items().is_empty() {
            return KeyResponse::not_consumed();
        }
        if self.session_is_stale(buffer) {
            return self.end_stale_session();
        }
        let mode = self.modes.mode();
        match self.dropdown.accept(mode, buffer) {
            Some(inserted) => self.make_accept_response(inserted),
            None => KeyResponse::not_consumed(),
        }
    }

    fn handle_navigate(&mut self, delta: isize) -> KeyResponse {
        if !self.dropdown.move_selection(delta) {
            return KeyResponse::not_consumed();
        }
        let mut resp = KeyResponse::consumed();
        resp.dropdown = self.dropdown_action();
        debug_assert!(matches!(resp.dropdown, DropdownAction::Show { .. }));
        resp
    }

    fn handle_escape(&mut self) -> KeyResponse {
        let mut resp = self.end_session();
        resp.consumed = resp.ghost_text.is_some() || resp.dropdown == DropdownAction::Hide;
        resp
    }
}
