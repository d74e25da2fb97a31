use ac_core::Mode;

use super::*;
use crate::DropdownPresenter;

#[test]
fn sorted_case_insensitively() {
    let index = make_index(&["beta", "Bravo", "bad", "Banner"]);
    let mut dropdown = DropdownPresenter::new(20, false, true);
    assert!(dropdown.refresh(&index, Mode::Both, &span_at_end("b")));
    assert_eq!(dropdown.items(), ["bad", "Banner", "beta", "Bravo"]);
    assert_eq!(dropdown.selected(), Some(0));
}

#[test]
fn drops_the_typed_term_itself() {
    let index = make_index(&["agent", "agents", "Agent"]);
    let mut dropdown = DropdownPresenter::new(20, false, true);
    assert!(dropdown.refresh(&index, Mode::Both, &span_at_end("agent")));
    assert_eq!(dropdown.items(), ["Agent", "agents"]);
}

#[test]
fn only_exact_match_hides() {
    let index = make_index(&["agent"]);
    let mut dropdown = DropdownPresenter::new(20, false, true);
    assert!(!dropdown.refresh(&index, Mode::Both, &span_at_end("agent")));
    assert!(!dropdown.is_visible());
}

#[test]
fn capped_at_max_results() {
    let terms: Vec<String> = (0..30).map(|i| format!("term{i}")).collect();
    let refs: Vec<&str> = terms.iter().map(String::as_str).collect();
    let index = make_index(&refs);
    let mut dropdown = DropdownPresenter::new(5, false, true);
    dropdown.refresh(&index, Mode::Both, &span_at_end("te"));
    assert_eq!(dropdown.items().len(), 5);
}

#[test]
fn selection_clamps() {
    let index = make_index(&["alpha", "alps", "alto"]);
    let mut dropdown = DropdownPresenter::new(20, false, true);
    assert!(!dropdown.move_selection(1));

    dropdown.refresh(&index, Mode::Both, &span_at_end("al"));
    assert!(dropdown.move_selection(-3));
    assert_eq!(dropdown.selected(), Some(0));
    assert!(dropdown.move_selection(1));
    assert_eq!(dropdown.selected_item(), Some("alps"));
    assert!(dropdown.move_selection(100));
    assert_eq!(dropdown.selected(), Some(2));
}

#[test]
fn hidden_in_ghost_only_and_off() {
    let index = make_index(&["alpha"]);
    let mut dropdown = DropdownPresenter::new(20, false, true);
    assert!(!dropdown.refresh(&index, Mode::GhostOnly, &span_at_end("al")));
    assert!(!dropdown.refresh(&index, Mode::Off, &span_at_end("al")));
    assert!(dropdown.refresh(&index, Mode::DropdownOnly, &span_at_end("al")));
}

#[test]
fn accept_is_noop_in_ghost_only() {
    let index = make_index(&["alpha"]);
    let mut dropdown = DropdownPresenter::new(20, false, true);
    let mut buf = MemoryBuffer::new("(al");
    dropdown.refresh(&index, Mode::Both, &span_at_end("(al"));

    assert_eq!(dropdown.accept(Mode::GhostOnly, &mut buf), None);
    assert_eq!(buf.text(), "(al");
    assert!(dropdown.is_visible());

    assert_eq!(dropdown.accept(Mode::Both, &mut buf).as_deref(), Some("alpha"));
    assert_eq!(buf.text(), "(alpha");
    assert_eq!(buf.caret(), 6);
    assert!(!dropdown.is_visible());
}

#[test]
fn fuzzy_fallback_keeps_distance_order() {
    let index = make_index(&["animals", "Animate", "animal", "zebra"]);
    let mut dropdown = DropdownPresenter::new(20, false, true);
    assert!(dropdown.refresh(&index, Mode::Both, &span_at_end("animl")));
    assert!(dropdown.is_fuzzy());
    assert_eq!(dropdown.items(), ["animal", "Animate", "animals"]);

    let mut strict = DropdownPresenter::new(20, false, false);
    assert!(!strict.refresh(&index, Mode::Both, &span_at_end("animl")));
}

#[test]
fn case_sensitive_dropdown() {
    let index = make_index(&["Alpha", "alpha", "alps"]);
    let mut dropdown = DropdownPresenter::new(20, true, false);
    dropdown.refresh(&index, Mode::Both, &span_at_end("al"));
    assert_eq!(dropdown.items(), ["alpha", "alps"]);
}

#[test]
fn hide_reports_visibility() {
    let index = make_index(&["alpha"]);
    let mut dropdown = DropdownPresenter::new(20, false, true);
    dropdown.refresh(&index, Mode::Both, &span_at_end("al"));
    assert!(dropdown.hide());
    assert!(!dropdown.hide());
    assert!(dropdown.items().is_empty());
    assert_eq!(dropdown.selected_item(), None);
}
