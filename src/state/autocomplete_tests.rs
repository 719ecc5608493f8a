//! Tests for the autocomplete widget.

use super::*;

fn widget() -> Autocomplete {
    Autocomplete::new(CandidateSet::sydney())
}

fn open_with_bon() -> Autocomplete {
    let mut ac = widget();
    ac.on_input("bon");
    assert_eq!(ac.matches().len(), 3, "precondition: three Bondi matches");
    ac
}

// ===== on_input =====

#[test]
fn starts_closed_with_no_highlight() {
    let ac = widget();
    assert_eq!(ac.state(), DropdownState::Closed);
    assert_eq!(ac.highlight_index(), -1);
    assert!(ac.matches().is_empty());
    assert_eq!(ac.query(), "");
}

#[test]
fn typing_bon_opens_with_bondi_variants() {
    let ac = open_with_bon();
    assert_eq!(ac.state(), DropdownState::Open);
    assert_eq!(ac.matches(), ["Bondi", "Bondi Beach", "Bondi Junction"]);
    assert_eq!(ac.highlight_index(), -1);
}

#[test]
fn typing_unknown_query_stays_closed() {
    let mut ac = widget();
    ac.on_input("xyz123");
    assert_eq!(ac.state(), DropdownState::Closed);
    assert!(ac.view().items.is_empty());
}

#[test]
fn clearing_the_field_closes_and_resets_highlight() {
    let mut ac = widget();
    ac.on_input("bondi");
    ac.on_key(AutocompleteKey::ArrowDown);
    ac.on_input("");
    assert_eq!(ac.state(), DropdownState::Closed);
    assert_eq!(ac.highlight_index(), -1);
}

#[test]
fn every_keystroke_resets_highlight() {
    let mut ac = open_with_bon();
    ac.on_key(AutocompleteKey::ArrowDown);
    ac.on_key(AutocompleteKey::ArrowDown);
    assert_eq!(ac.highlight_index(), 1);

    ac.on_input("bond");
    assert_eq!(ac.highlight_index(), -1);
    assert!(ac.is_open());
}

#[test]
fn query_keeps_original_case() {
    let mut ac = widget();
    ac.on_input("BoN");
    assert_eq!(ac.query(), "BoN");
    assert_eq!(ac.matches().len(), 3);
}

#[test]
fn empty_candidate_set_is_always_closed() {
    let mut ac = Autocomplete::new(CandidateSet::default());
    for query in ["a", "bondi", " ", "Z"] {
        ac.on_input(query);
        assert_eq!(ac.state(), DropdownState::Closed, "query {:?}", query);
    }
    let outcome = ac.on_key(AutocompleteKey::ArrowDown);
    assert!(outcome.consumed);
    assert_eq!(ac.highlight_index(), -1);
}

// ===== Arrow keys =====

#[test]
fn arrow_down_clamps_at_last_match() {
    let mut ac = open_with_bon();
    for expected in [0, 1, 2, 2, 2] {
        let outcome = ac.on_key(AutocompleteKey::ArrowDown);
        assert!(outcome.consumed);
        assert_eq!(outcome.commit, None);
        assert_eq!(ac.highlight_index(), expected);
    }
}

#[test]
fn arrow_up_clamps_at_no_highlight() {
    let mut ac = open_with_bon();
    ac.on_key(AutocompleteKey::ArrowDown);
    ac.on_key(AutocompleteKey::ArrowDown);

    for expected in [0, -1, -1] {
        let outcome = ac.on_key(AutocompleteKey::ArrowUp);
        assert!(outcome.consumed);
        assert_eq!(ac.highlight_index(), expected);
    }
}

#[test]
fn arrow_up_does_not_wrap_to_last_item() {
    let mut ac = open_with_bon();
    ac.on_key(AutocompleteKey::ArrowUp);
    assert_eq!(ac.highlight(), None);
}

#[test]
fn arrows_keep_dropdown_open() {
    let mut ac = open_with_bon();
    ac.on_key(AutocompleteKey::ArrowDown);
    ac.on_key(AutocompleteKey::ArrowUp);
    assert_eq!(ac.state(), DropdownState::Open);
}

#[test]
fn arrows_while_closed_are_noops() {
    let mut ac = open_with_bon();
    ac.on_key(AutocompleteKey::Escape);
    ac.on_key(AutocompleteKey::ArrowDown);
    assert_eq!(ac.highlight_index(), -1);
    assert_eq!(ac.state(), DropdownState::Closed);
}

#[test]
fn view_marks_exactly_the_highlighted_item() {
    let mut ac = open_with_bon();
    assert_eq!(ac.view().selected_index(), None);

    ac.on_key(AutocompleteKey::ArrowDown);
    ac.on_key(AutocompleteKey::ArrowDown);
    let view = ac.view();
    assert!(view.open);
    assert_eq!(view.selected_index(), Some(1));
    assert_eq!(view.items.iter().filter(|item| item.selected).count(), 1);
    assert_eq!(view.items[1].text, "Bondi Beach");
}

// ===== Enter =====

#[test]
fn enter_commits_highlighted_match_and_closes() {
    let mut ac = open_with_bon();
    ac.on_key(AutocompleteKey::ArrowDown);
    ac.on_key(AutocompleteKey::ArrowDown);

    let outcome = ac.on_key(AutocompleteKey::Enter);
    assert!(outcome.consumed);
    assert_eq!(outcome.commit.as_deref(), Some("Bondi Beach"));
    assert_eq!(ac.state(), DropdownState::Closed);
    assert_eq!(ac.highlight_index(), -1);
}

#[test]
fn enter_without_highlight_commits_nothing_and_stays_open() {
    let mut ac = open_with_bon();
    let outcome = ac.on_key(AutocompleteKey::Enter);
    assert!(outcome.consumed, "Enter is always consumed");
    assert_eq!(outcome.commit, None);
    assert_eq!(ac.state(), DropdownState::Open);
    assert_eq!(ac.matches().len(), 3);
}

#[test]
fn commit_leaves_typed_query_untouched() {
    let mut ac = open_with_bon();
    ac.on_key(AutocompleteKey::ArrowDown);
    ac.on_key(AutocompleteKey::Enter);
    assert_eq!(ac.query(), "bon");
}

// ===== Escape =====

#[test]
fn escape_closes_from_open_with_highlight() {
    let mut ac = open_with_bon();
    ac.on_key(AutocompleteKey::ArrowDown);
    let outcome = ac.on_key(AutocompleteKey::Escape);
    assert!(!outcome.consumed);
    assert_eq!(outcome.commit, None);
    assert_eq!(ac.state(), DropdownState::Closed);
    assert_eq!(ac.highlight_index(), -1);
    assert_eq!(ac.query(), "bon", "Escape does not clear the query");
}

#[test]
fn escape_while_closed_stays_closed() {
    let mut ac = widget();
    ac.on_key(AutocompleteKey::Escape);
    assert_eq!(ac.state(), DropdownState::Closed);
    assert_eq!(ac.highlight_index(), -1);
}

// ===== Clicks =====

#[test]
fn item_click_commits_regardless_of_highlight() {
    let mut ac = open_with_bon();
    ac.on_key(AutocompleteKey::ArrowDown);

    let committed = ac.on_item_click(2);
    assert_eq!(committed.as_deref(), Some("Bondi Junction"));
    assert_eq!(ac.state(), DropdownState::Closed);
}

#[test]
fn item_click_out_of_range_is_ignored() {
    let mut ac = open_with_bon();
    assert_eq!(ac.on_item_click(3), None);
    assert_eq!(ac.state(), DropdownState::Open);
}

#[test]
fn outside_click_closes_but_keeps_query() {
    let mut ac = open_with_bon();
    ac.on_outside_click();
    assert_eq!(ac.state(), DropdownState::Closed);
    assert_eq!(ac.query(), "bon");
}

#[test]
fn retyping_after_close_reopens() {
    let mut ac = open_with_bon();
    ac.on_outside_click();
    ac.on_input("bon");
    assert_eq!(ac.state(), DropdownState::Open);
}
