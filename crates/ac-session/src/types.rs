use ac_core::PrefixSpan;

/// Toolkit-neutral key events the coordinator may claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    /// Accept the inline ghost remainder (Tab, Right at end of line, ...).
    GhostAccept,
    /// Accept the selected dropdown item (Enter).
    Commit,
    ArrowUp,
    ArrowDown,
    Escape,
    /// Any other key; never consumed.
    Other,
}

/// What the host should do with the dropdown list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropdownAction {
    Keep,
    Show { items: Vec<String>, selected: usize },
    Hide,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyResponse {
    /// The host must not apply its default handling for the key.
    pub consumed: bool,
    /// Term written into the buffer by an accept.
    pub commit: Option<String>,
    pub dropdown: DropdownAction,
    /// Ghost text: `Some("")` = clear, `Some(text)` = show, `None` = no change.
    pub ghost_text: Option<String>,
}

impl KeyResponse {
    pub(crate) fn not_consumed() -> Self {
        Self {
            consumed: false,
            commit: None,
            dropdown: DropdownAction::Keep,
            ghost_text: None,
        }
    }

    pub(crate) fn consumed() -> Self {
        Self {
            consumed: true,
            ..Self::not_consumed()
        }
    }
}

pub(crate) enum SessionState {
    Idle,
    Active(CompletionSession),
}

/// One typing episode: lives from the first qualifying prefix until accept,
/// escape, caret relocation, mode change or document switch.
pub(crate) struct CompletionSession {
    pub(crate) span: PrefixSpan,
}
