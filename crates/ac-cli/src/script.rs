//! Keystroke scripts for `actool simulate`.
//!
//! Plain characters are typed; `<name>` inserts a special key:
//! `<tab>` (ghost accept), `<enter>` (commit), `<up>`, `<down>`, `<esc>`,
//! `<left>`, `<right>`, `<bs>` and `<lt>` for a literal `<`.

use ac_engine::KeyEvent;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("unknown key <{0}>")]
    UnknownKey(String),
    #[error("unterminated key name starting at offset {0}")]
    Unterminated(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Type(char),
    Key(KeyEvent),
    Backspace,
    Left,
    Right,
}

impl Step {
    /// Short label for tables and JSON.
    pub fn label(&self) -> String {
        match self {
            Step::Type(c) => c.to_string(),
            Step::Key(KeyEvent::GhostAccept) => "<tab>".to_string(),
            Step::Key(KeyEvent::Commit) => "<enter>".to_string(),
            Step::Key(KeyEvent::ArrowUp) => "<up>".to_string(),
            Step::Key(KeyEvent::ArrowDown) => "<down>".to_string(),
            Step::Key(KeyEvent::Escape) => "<esc>".to_string(),
            Step::Key(KeyEvent::Other) => "<other>".to_string(),
            Step::Backspace => "<bs>".to_string(),
            Step::Left => "<left>".to_string(),
            Step::Right => "<right>".to_string(),
        }
    }
}

fn named_step(name: &str) -> Result<Step, ScriptError> {
    Ok(match name {
        "tab" => Step::Key(KeyEvent::GhostAccept),
        "enter" => Step::Key(KeyEvent::Commit),
        "up" => Step::Key(KeyEvent::ArrowUp),
        "down" => Step::Key(KeyEvent::ArrowDown),
        "esc" => Step::Key(KeyEvent::Escape),
        "other" => Step::Key(KeyEvent::Other),
        "bs" => Step::Backspace,
        "left" => Step::Left,
        "right" => Step::Right,
        "lt" => Step::Type('<'),
        _ => return Err(ScriptError::UnknownKey(name.to_string())),
    })
}

pub fn parse_script(script: &str) -> Result<Vec<Step>, ScriptError> {
    let mut steps = Vec::new();
    let mut rest = script;
    while let Some(c) = rest.chars().next() {
        if c == '<' {
            let offset = script.len() - rest.len();
            let close = rest.find('>').ok_or(ScriptError::Unterminated(offset))?;
            steps.push(named_step(&rest[1..close])?);
            rest = &rest[close + 1..];
        } else {
            steps.push(Step::Type(c));
            rest = &rest[c.len_utf8()..];
        }
    }
    Ok(steps)
}
