//! Completion presentation mode.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Which completion presentations are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Off,
    GhostOnly,
    DropdownOnly,
    #[default]
    Both,
}

impl Mode {
    pub const ALL: [Mode; 4] = [Mode::Off, Mode::GhostOnly, Mode::DropdownOnly, Mode::Both];

    pub fn ghost_enabled(self) -> bool {
        matches!(self, Self::GhostOnly | Self::Both)
    }

    pub fn dropdown_enabled(self) -> bool {
        matches!(self, Self::DropdownOnly | Self::Both)
    }

    pub fn enabled(self) -> bool {
        self != Self::Off
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::GhostOnly => "ghost_only",
            Self::DropdownOnly => "dropdown_only",
            Self::Both => "both",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown completion mode: {0} (expected off, ghost_only, dropdown_only or both)")]
pub struct ParseModeError(String);

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| ParseModeError(s.to_string()))
    }
}
