use serde::Serialize;

use ac_core::dict::DictError;
use ac_session::{DropdownAction, KeyResponse};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum AcError {
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("invalid data: {msg}")]
    InvalidData { msg: String },
}

impl From<DictError> for AcError {
    fn from(e: DictError) -> Self {
        match e {
            DictError::Io(e) => AcError::Io { msg: e.to_string() },
            e @ DictError::InvalidEncoding { .. } => AcError::InvalidData { msg: e.to_string() },
        }
    }
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// Event-driven response from the engine's hooks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AcKeyResponse {
    pub consumed: bool,
    pub events: Vec<AcEvent>,
}

/// One rendering instruction for the host, in the order it should apply them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AcEvent {
    Commit { text: String },
    ShowDropdown { items: Vec<String>, selected: usize },
    HideDropdown,
    SetGhostText { text: String },
    ClearGhostText,
}

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

pub(super) fn convert_to_events(resp: KeyResponse) -> AcKeyResponse {
    let mut events = Vec::new();

    // 1. Commit
    if let Some(text) = resp.commit {
        events.push(AcEvent::Commit { text });
    }

    // 2. Dropdown
    match resp.dropdown {
        DropdownAction::Show { items, selected } => {
            events.push(AcEvent::ShowDropdown { items, selected });
        }
        DropdownAction::Hide => events.push(AcEvent::HideDropdown),
        DropdownAction::Keep => {}
    }

    // 3. Ghost text
    if let Some(ghost) = resp.ghost_text {
        if ghost.is_empty() {
            events.push(AcEvent::ClearGhostText);
        } else {
            events.push(AcEvent::SetGhostText { text: ghost });
        }
    }

    AcKeyResponse {
        consumed: resp.consumed,
        events,
    }
}
