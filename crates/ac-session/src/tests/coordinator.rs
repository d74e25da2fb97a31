use ac_core::{Layer, Mode};

use super::*;
use crate::{DropdownAction, KeyEvent, TextBuffer};

fn shown_items(resp: &KeyResponse) -> Option<(&[String], usize)> {
    match &resp.dropdown {
        DropdownAction::Show { items, selected } => Some((items.as_slice(), *selected)),
        _ => None,
    }
}

#[test]
fn typing_inst_shows_ghost_remainder() {
    let mut coord = make_coordinator(Mode::Both);
    let mut buf = MemoryBuffer::default();
    let resp = type_string(&mut coord, &mut buf, "(inst");

    assert!(!resp.consumed);
    assert_eq!(resp.ghost_text.as_deref(), Some("ance"));
    assert_eq!(coord.ghost().text(), Some("ance"));
    assert!(coord.is_active());
    assert_eq!(coord.session_span().map(|s| s.text.as_str()), Some("inst"));
}

#[test]
fn typing_an_shows_sorted_dropdown() {
    let mut coord = make_coordinator(Mode::Both);
    let mut buf = MemoryBuffer::default();
    let resp = type_string(&mut coord, &mut buf, "(an");

    let (items, selected) = shown_items(&resp).expect("dropdown shown");
    assert_eq!(items, ["anchor", "Animal", "Animate"]);
    assert_eq!(selected, 0);
    assert!(coord.dropdown().is_visible());
    assert!(!coord.dropdown().is_fuzzy());
}

#[test]
fn ghost_accept_clears_dropdown() {
    let mut coord = make_coordinator(Mode::Both);
    let mut buf = MemoryBuffer::default();
    type_string(&mut coord, &mut buf, "(inst");
    assert!(coord.dropdown().is_visible());

    let resp = coord.on_key(KeyEvent::GhostAccept, &mut buf);
    assert!(resp.consumed);
    assert_eq!(resp.commit.as_deref(), Some("instance"));
    assert_eq!(resp.ghost_text.as_deref(), Some(""));
    assert_eq!(resp.dropdown, DropdownAction::Hide);
    assert_eq!(buf.text(), "(instance");
    assert_eq!(buf.caret(), buf.text().len());
    assert!(!coord.dropdown().is_visible());
    assert!(!coord.ghost().is_visible());
    assert!(!coord.is_active());
}

#[test]
fn dropdown_accept_clears_ghost() {
    let mut coord = make_coordinator(Mode::Both);
    let mut buf = MemoryBuffer::default();
    type_string(&mut coord, &mut buf, "(an");
    assert!(coord.ghost().is_visible());

    let resp = coord.on_key(KeyEvent::ArrowDown, &mut buf);
    assert!(resp.consumed);
    assert_eq!(shown_items(&resp).map(|(_, s)| s), Some(1));

    let resp = coord.on_key(KeyEvent::Commit, &mut buf);
    assert!(resp.consumed);
    assert_eq!(resp.commit.as_deref(), Some("Animal"));
    assert_eq!(resp.ghost_text.as_deref(), Some(""));
    assert_eq!(buf.text(), "(Animal");
    assert_eq!(buf.caret(), 7);
    assert!(!coord.ghost().is_visible());
    assert!(!coord.dropdown().is_visible());
}

#[test]
fn commit_without_dropdown_falls_through() {
    let mut coord = make_coordinator(Mode::Both);
    let mut buf = MemoryBuffer::new("(x");
    let resp = coord.on_key(KeyEvent::Commit, &mut buf);
    assert!(!resp.consumed);
    assert_eq!(resp.commit, None);
    assert_eq!(buf.text(), "(x");

    let mut coord = make_coordinator(Mode::GhostOnly);
    let mut buf = MemoryBuffer::default();
    type_string(&mut coord, &mut buf, "(inst");
    let resp = coord.on_key(KeyEvent::Commit, &mut buf);
    assert!(!resp.consumed);
    assert_eq!(buf.text(), "(inst");
    assert!(coord.ghost().is_visible());
}

#[test]
fn arrows_clamp_and_need_a_list() {
    let mut coord = make_coordinator(Mode::Both);
    let mut buf = MemoryBuffer::default();
    assert!(!coord.on_key(KeyEvent::ArrowDown, &mut buf).consumed);

    type_string(&mut coord, &mut buf, "(an");
    let resp = coord.on_key(KeyEvent::ArrowUp, &mut buf);
    assert!(resp.consumed);
    assert_eq!(coord.dropdown().selected(), Some(0));

    for _ in 0..10 {
        coord.on_key(KeyEvent::ArrowDown, &mut buf);
    }
    assert_eq!(coord.dropdown().selected(), Some(2));
    assert_eq!(coord.dropdown().selected_item(), Some("Animate"));
}

#[test]
fn escape_dismisses_everything_once() {
    let mut coord = make_coordinator(Mode::Both);
    let mut buf = MemoryBuffer::default();
    type_string(&mut coord, &mut buf, "(inst");

    let resp = coord.on_key(KeyEvent::Escape, &mut buf);
    assert!(resp.consumed);
    assert_eq!(resp.ghost_text.as_deref(), Some(""));
    assert_eq!(resp.dropdown, DropdownAction::Hide);
    assert_eq!(buf.text(), "(inst");
    assert!(!coord.is_active());

    let resp = coord.on_key(KeyEvent::Escape, &mut buf);
    assert!(!resp.consumed);
}

#[test]
fn other_keys_are_never_consumed() {
    let mut coord = make_coordinator(Mode::Both);
    let mut buf = MemoryBuffer::default();
    type_string(&mut coord, &mut buf, "(inst");
    let resp = coord.on_key(KeyEvent::Other, &mut buf);
    assert_eq!(resp, KeyResponse::not_consumed());
    assert!(coord.is_active());
}

#[test]
fn ghost_keeps_typed_case_and_learns_the_result() {
    let mut coord = make_coordinator(Mode::Both);
    let mut buf = MemoryBuffer::default();
    type_string(&mut coord, &mut buf, "(Inst");
    let resp = coord.on_key(KeyEvent::GhostAccept, &mut buf);
    assert_eq!(resp.commit.as_deref(), Some("Instance"));
    assert_eq!(buf.text(), "(Instance");
    assert!(coord.index().contains(Layer::Buffer, "Instance"));
    assert!(!coord.index().contains(Layer::Vocabulary, "Instance"));
}

#[test]
fn completed_token_joins_buffer_layer() {
    let mut coord = make_coordinator(Mode::Both);
    let mut buf = MemoryBuffer::default();
    type_string(&mut coord, &mut buf, "(foo_bar ");
    assert!(coord.index().contains(Layer::Buffer, "foo_bar"));
    assert!(!coord.index().contains(Layer::Vocabulary, "foo_bar"));

    let resp = type_string(&mut coord, &mut buf, "(fo");
    let (items, _) = shown_items(&resp).expect("dropdown shown");
    assert_eq!(items, ["foo_bar"]);
    assert_eq!(resp.ghost_text.as_deref(), Some("o_bar"));
}

#[test]
fn short_prefix_does_not_start_a_session() {
    let mut coord = make_coordinator(Mode::Both);
    let mut buf = MemoryBuffer::default();
    let resp = type_string(&mut coord, &mut buf, "(i");
    assert!(!coord.is_active());
    assert_eq!(resp.ghost_text, None);
    assert_eq!(resp.dropdown, DropdownAction::Keep);
}

#[test]
fn caret_inside_token_ends_session() {
    let mut coord = make_coordinator(Mode::Both);
    let buf = MemoryBuffer::with_caret("(instXYZ", 5);
    coord.on_text_changed(&buf);
    assert!(!coord.is_active());
    assert!(!coord.ghost().is_visible());
}

#[test]
fn caret_relocation_ends_session() {
    let mut coord = make_coordinator(Mode::Both);
    let mut buf = MemoryBuffer::default();
    type_string(&mut coord, &mut buf, "(inst");

    // Caret still at the end of the prefix
    let resp = coord.on_caret_moved(&buf);
    assert_eq!(resp, KeyResponse::not_consumed());
    assert!(coord.is_active());

    buf.move_caret(-1);
    let resp = coord.on_caret_moved(&buf);
    assert_eq!(resp.ghost_text.as_deref(), Some(""));
    assert_eq!(resp.dropdown, DropdownAction::Hide);
    assert!(!coord.is_active());
    assert_eq!(buf.text(), "(inst");
}

#[test]
fn document_switch_replaces_buffer_layer() {
    let mut coord = make_coordinator(Mode::Both);
    coord.on_document_switched(&MemoryBuffer::new("(=> (foo ?X) (bar ?X))"));
    assert!(coord.index().contains(Layer::Buffer, "foo"));
    assert!(coord.index().contains(Layer::Buffer, "bar"));

    coord.on_document_switched(&MemoryBuffer::new("(baz)"));
    assert!(!coord.index().contains(Layer::Buffer, "foo"));
    assert!(coord.index().contains(Layer::Buffer, "baz"));
    assert_eq!(coord.index().len(Layer::Vocabulary), VOCABULARY.len());
}

#[test]
fn document_switch_ends_session() {
    let mut coord = make_coordinator(Mode::Both);
    let mut buf = MemoryBuffer::default();
    type_string(&mut coord, &mut buf, "(inst");
    let resp = coord.on_document_switched(&MemoryBuffer::new("other"));
    assert!(!coord.is_active());
    assert_eq!(resp.ghost_text.as_deref(), Some(""));
}

#[test]
fn mode_off_shows_nothing() {
    let mut coord = make_coordinator(Mode::Off);
    let mut buf = MemoryBuffer::default();
    type_string(&mut coord, &mut buf, "(inst");
    assert!(!coord.is_active());
    assert!(!coord.ghost().is_visible());
    assert!(!coord.dropdown().is_visible());
    assert!(!coord.on_key(KeyEvent::GhostAccept, &mut buf).consumed);
    assert!(!coord.on_key(KeyEvent::Commit, &mut buf).consumed);
}

#[test]
fn mode_off_still_tracks_document_tokens() {
    let mut coord = make_coordinator(Mode::Off);
    let mut buf = MemoryBuffer::default();
    type_string(&mut coord, &mut buf, "(widget ");
    assert!(coord.index().contains(Layer::Buffer, "widget"));
}

#[test]
fn single_presenter_modes() {
    let mut coord = make_coordinator(Mode::GhostOnly);
    let mut buf = MemoryBuffer::default();
    let resp = type_string(&mut coord, &mut buf, "(inst");
    assert_eq!(resp.ghost_text.as_deref(), Some("ance"));
    assert_eq!(resp.dropdown, DropdownAction::Hide);

    let mut coord = make_coordinator(Mode::DropdownOnly);
    let mut buf = MemoryBuffer::default();
    let resp = type_string(&mut coord, &mut buf, "(inst");
    assert_eq!(resp.ghost_text.as_deref(), Some(""));
    assert!(shown_items(&resp).is_some());
    assert!(!coord.on_key(KeyEvent::GhostAccept, &mut buf).consumed);
    assert_eq!(buf.text(), "(inst");
}

#[test]
fn set_mode_clears_presenters() {
    let mut coord = make_coordinator(Mode::Both);
    let mut buf = MemoryBuffer::default();
    type_string(&mut coord, &mut buf, "(inst");

    let resp = coord.set_mode(Mode::DropdownOnly);
    assert_eq!(coord.mode(), Mode::DropdownOnly);
    assert_eq!(resp.ghost_text.as_deref(), Some(""));
    assert_eq!(resp.dropdown, DropdownAction::Hide);
    assert!(!coord.is_active());
    assert_eq!(buf.text(), "(inst");
}

#[test]
fn unknown_prefix_ends_session() {
    let mut coord = make_coordinator(Mode::Both);
    let mut buf = MemoryBuffer::default();
    type_string(&mut coord, &mut buf, "(inst");
    assert!(coord.is_active());
    let resp = type_string(&mut coord, &mut buf, "qqq");
    assert!(!coord.is_active());
    assert_eq!(resp.ghost_text.as_deref(), Some(""));
    assert_eq!(resp.dropdown, DropdownAction::Hide);
}

#[test]
fn misspelled_prefix_falls_back_to_fuzzy_list() {
    let mut coord = make_coordinator(Mode::Both);
    let mut buf = MemoryBuffer::default();
    let resp = type_string(&mut coord, &mut buf, "(animl");

    assert_eq!(resp.ghost_text.as_deref(), Some(""));
    let (items, _) = shown_items(&resp).expect("fuzzy list shown");
    assert_eq!(items, ["Animal", "Animate"]);
    assert!(coord.dropdown().is_fuzzy());

    let resp = coord.on_key(KeyEvent::Commit, &mut buf);
    assert_eq!(resp.commit.as_deref(), Some("Animal"));
    assert_eq!(buf.text(), "(Animal");
}

#[test]
fn stale_prefix_is_not_overwritten() {
    let mut coord = make_coordinator(Mode::Both);
    let mut buf = MemoryBuffer::default();
    type_string(&mut coord, &mut buf, "(inst");

    // Edit behind the coordinator's back
    buf.replace_range(1, 5, "abcd");
    let resp = coord.on_key(KeyEvent::GhostAccept, &mut buf);
    assert!(!resp.consumed);
    assert_eq!(resp.commit, None);
    assert_eq!(buf.text(), "(abcd");

    // Host is told to drop both presentations and the session is gone
    assert_eq!(resp.ghost_text.as_deref(), Some(""));
    assert_eq!(resp.dropdown, DropdownAction::Hide);
    assert!(!coord.is_active());
    assert!(!coord.ghost().is_visible());
    assert!(!coord.dropdown().is_visible());
}

#[test]
fn stale_prefix_blocks_dropdown_commit() {
    let mut coord = make_coordinator(Mode::DropdownOnly);
    let mut buf = MemoryBuffer::default();
    type_string(&mut coord, &mut buf, "(inst");
    assert!(coord.dropdown().is_visible());

    buf.replace_range(1, 5, "abcd");
    let resp = coord.on_key(KeyEvent::Commit, &mut buf);
    assert!(!resp.consumed);
    assert_eq!(buf.text(), "(abcd");
    assert_eq!(resp.dropdown, DropdownAction::Hide);
    assert!(!coord.is_active());
}
