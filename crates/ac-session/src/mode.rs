//! Mode Controller: the single place the completion mode changes.

use tracing::debug;

use ac_core::Mode;

/// Host-side observer of mode changes.
///
/// On every change the controller calls `dismiss_transient_ui` and then
/// `apply_mode`, in that order.
pub trait ModeListener: Send {
    /// Tear down any visible completion UI (popups, overlays).
    fn dismiss_transient_ui(&mut self);
    fn apply_mode(&mut self, mode: Mode);
}

pub struct ModeController {
    mode: Mode,
    listener: Option<Box<dyn ModeListener>>,
}

impl ModeController {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            listener: None,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Register the listener, replacing any previous one.
    pub fn set_listener(&mut self, listener: Box<dyn ModeListener>) {
        self.listener = Some(listener);
    }

    pub fn clear_listener(&mut self) -> Option<Box<dyn ModeListener>> {
        self.listener.take()
    }

    pub fn has_listener(&self) -> bool {
        self.listener.is_some()
    }

    /// Persist `mode`, then notify the listener.
    pub fn set_mode(&mut self, mode: Mode) {
        debug!(from = %self.mode, to = %mode, "completion mode changed");
        self.mode = mode;
        if let Some(listener) = self.listener.as_mut() {
            listener.dismiss_transient_ui();
            listener.apply_mode(mode);
        }
    }

    pub fn ghost_enabled(&self) -> bool {
        self.mode.ghost_enabled()
    }

    pub fn dropdown_enabled(&self) -> bool {
        self.mode.dropdown_enabled()
    }

    pub fn enabled(&self) -> bool {
        self.mode.enabled()
    }
}

impl Default for ModeController {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}
