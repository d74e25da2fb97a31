use super::types::{DropdownAction, KeyResponse, SessionState};
use super::CompletionCoordinator;

impl CompletionCoordinator {
    /// Current dropdown state as a host action.
    pub(super) fn dropdown_action(&self) -> DropdownAction {
        match self.dropdown.selected() {
            Some(selected) => DropdownAction::Show {
                items: self.dropdown.items().to_vec(),
                selected,
            },
            None => DropdownAction::Hide,
        }
    }

    /// Full presentation after a refresh: both presenters report their state.
    pub(super) fn make_presentation_response(&self) -> KeyResponse {
        let mut resp = KeyResponse::not_consumed();
        resp.ghost_text = Some(self.ghost.text().unwrap_or_default().to_string());
        resp.dropdown = self.dropdown_action();
        resp
    }

    /// Clear both presenters and drop the session. Only presenters that were
    /// showing something get a clear instruction.
    pub(super) fn end_session(&mut self) -> KeyResponse {
        let had_ghost = self.ghost.clear();
        let had_dropdown = self.dropdown.hide();
        self.state = SessionState::Idle;

        let mut resp = KeyResponse::not_consumed();
        if had_ghost {
            resp.ghost_text = Some(String::new());
        }
        if had_dropdown {
            resp.dropdown = DropdownAction::Hide;
        }
        resp
    }

    /// After either presenter accepted: record the term as a document token
    /// and tear everything down.
    pub(super) fn make_accept_response(&mut self, inserted: String) -> KeyResponse {
        self.index.insert_buffer(&inserted);
        self.ghost.clear();
        self.dropdown.hide();
        self.state = SessionState::Idle;

        let mut resp = KeyResponse::consumed();
        resp.commit = Some(inserted);
        resp.ghost_text = Some(String::new());
        resp.dropdown = DropdownAction::Hide;
        resp
    }
}
