use std::process;

use serde::Serialize;

use ac_engine::api::{AcEngine, AcEvent, AcKeyResponse};
use ac_engine::{CompletionConfig, MemoryBuffer, Mode};

use super::{die, load_engine, print_json};
use crate::script::{parse_script, Step};
use crate::table;

/// What a host would be showing after applying every event so far.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct HostView {
    pub ghost: Option<String>,
    pub dropdown: Vec<String>,
    pub selected: Option<usize>,
}

impl HostView {
    pub fn apply(&mut self, resp: &AcKeyResponse) {
        for event in &resp.events {
            match event {
                AcEvent::Commit { .. } => {}
                AcEvent::ShowDropdown { items, selected } => {
                    self.dropdown = items.clone();
                    self.selected = Some(*selected);
                }
                AcEvent::HideDropdown => {
                    self.dropdown.clear();
                    self.selected = None;
                }
                AcEvent::SetGhostText { text } => self.ghost = Some(text.clone()),
                AcEvent::ClearGhostText => self.ghost = None,
            }
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SimulatedStep {
    pub input: String,
    pub text: String,
    pub caret: usize,
    pub consumed: bool,
    pub events: Vec<AcEvent>,
    pub view: HostView,
}

/// Feed `steps` to `engine` the way an editor would: typed characters go
/// into the buffer first, unclaimed keys fall back to default handling.
pub fn run_steps(engine: &AcEngine, buf: &mut MemoryBuffer, steps: &[Step]) -> Vec<SimulatedStep> {
    let mut view = HostView::default();
    let mut out = Vec::with_capacity(steps.len());
    for step in steps {
        let resp = match *step {
            Step::Type(c) => {
                buf.insert(c.encode_utf8(&mut [0; 4]));
                engine.text_changed(buf)
            }
            Step::Backspace => {
                buf.backspace();
                engine.text_changed(buf)
            }
            Step::Left => {
                buf.move_caret(-1);
                engine.caret_moved(buf)
            }
            Step::Right => {
                buf.move_caret(1);
                engine.caret_moved(buf)
            }
            Step::Key(event) => engine.handle_key(event, buf),
        };
        view.apply(&resp);
        out.push(SimulatedStep {
            input: step.label(),
            text: buf.text().to_string(),
            caret: buf.caret(),
            consumed: resp.consumed,
            events: resp.events,
            view: view.clone(),
        });
    }
    out
}

pub fn simulate(
    vocab_file: &str,
    script: &str,
    document: Option<&str>,
    mode: Option<Mode>,
    json: bool,
) {
    let steps = die!(parse_script(script), "Error: {}");
    let mut config = CompletionConfig::default();
    if let Some(mode) = mode {
        config.mode = mode;
    }
    let engine = load_engine(vocab_file, document, config);
    let mut buf = MemoryBuffer::default();
    let results = run_steps(&engine, &mut buf, &steps);

    if json {
        print_json(&results);
        return;
    }
    let rows: Vec<Vec<String>> = results
        .iter()
        .map(|r| {
            let mut text = r.text.clone();
            text.insert(r.caret, '|');
            let dropdown = match r.view.selected {
                Some(sel) => r
                    .view
                    .dropdown
                    .iter()
                    .enumerate()
                    .map(|(i, t)| if i == sel { format!("[{t}]") } else { t.clone() })
                    .collect::<Vec<_>>()
                    .join(" "),
                None => String::new(),
            };
            vec![
                r.input.clone(),
                text,
                r.view.ghost.clone().unwrap_or_default(),
                dropdown,
                if r.consumed { "yes" } else { "" }.to_string(),
            ]
        })
        .collect();
    print!(
        "{}",
        table::render(&["key", "buffer", "ghost", "dropdown", "consumed"], &rows)
    );
}
