use super::*;
use crate::state::edit::EditState;

fn positions(elements: &[PeriodicElement]) -> Vec<u32> {
    elements.iter().map(|el| el.position).collect()
}

fn lithium_x() -> PeriodicElement {
    PeriodicElement::new(3, "Lithium-X", 6.941, "Lx")
}

// =============================================================
// Fixture and seeding
// =============================================================

#[test]
fn element_data_is_hydrogen_through_neon_in_position_order() {
    let data = element_data();
    assert_eq!(data.len(), 10);
    assert_eq!(positions(&data), (1..=10).collect::<Vec<_>>());
    assert_eq!(data[0], PeriodicElement::new(1, "Hydrogen", 1.0079, "H"));
    assert_eq!(data[9], PeriodicElement::new(10, "Neon", 20.1797, "Ne"));
}

#[test]
fn element_data_positions_are_unique() {
    let data = element_data();
    let mut seen = positions(&data);
    seen.dedup();
    assert_eq!(seen.len(), data.len());
}

#[test]
fn default_state_shows_every_element_unfiltered() {
    let state = ElementsState::default();
    assert_eq!(state.elements, element_data());
    assert_eq!(state.filtered_elements, state.elements);
    assert!(state.active_filter.is_empty());
}

#[test]
fn new_state_seeds_both_views_from_records() {
    let records = vec![PeriodicElement::new(7, "Nitrogen", 14.0067, "N")];
    let state = ElementsState::new(records.clone());
    assert_eq!(state.elements, records);
    assert_eq!(state.filtered_elements, records);
}

#[test]
fn weight_text_uses_shortest_decimal_form() {
    assert_eq!(PeriodicElement::new(3, "Lithium", 6.941, "Li").weight_text(), "6.941");
    assert_eq!(PeriodicElement::new(1, "Hydrogen", 1.0079, "H").weight_text(), "1.0079");
    assert_eq!(PeriodicElement::new(1, "Whole", 2.0, "W").weight_text(), "2");
}

// =============================================================
// apply_filter
// =============================================================

#[test]
fn apply_filter_he_matches_only_helium() {
    let mut state = ElementsState::default();
    state.apply_filter("he");
    assert_eq!(state.filtered_elements, vec![PeriodicElement::new(2, "Helium", 4.0026, "He")]);
}

#[test]
fn apply_filter_is_case_insensitive_and_stores_folded_text() {
    let mut state = ElementsState::default();
    state.apply_filter("NE");
    assert_eq!(state.active_filter, "ne");
    // Fluorine ends in "ne"; Neon matches on name and symbol.
    assert_eq!(positions(&state.filtered_elements), vec![9, 10]);
}

#[test]
fn apply_filter_matches_position_and_weight_text() {
    let mut state = ElementsState::default();
    state.apply_filter("10");
    // Boron 10.811, Carbon 12.0107 and Neon by position.
    assert_eq!(positions(&state.filtered_elements), vec![5, 6, 10]);
}

#[test]
fn apply_filter_twice_is_idempotent() {
    let mut once = ElementsState::default();
    once.apply_filter("on");
    let mut twice = once.clone();
    twice.apply_filter("on");
    assert_eq!(once, twice);
}

#[test]
fn apply_filter_with_no_match_yields_empty_view() {
    let mut state = ElementsState::default();
    state.apply_filter("xenon");
    assert!(state.filtered_elements.is_empty());
    assert_eq!(state.elements.len(), 10);
}

#[test]
fn apply_filter_empty_restores_every_element() {
    let mut state = ElementsState::default();
    state.apply_filter("he");
    state.apply_filter("");
    assert_eq!(state.filtered_elements, state.elements);
}

#[test]
fn filtered_view_matches_predicate_for_every_element() {
    for text in ["h", "o", "1", ".0", "ium", "B", "zz", ""] {
        let mut state = ElementsState::default();
        state.apply_filter(text);
        let needle = text.to_lowercase();
        for el in &state.elements {
            let expected = searchable(el).iter().any(|v| v.to_lowercase().contains(&needle));
            assert_eq!(
                state.filtered_elements.contains(el),
                expected,
                "filter {text:?} disagreed on {}",
                el.name
            );
        }
    }
}

fn searchable(el: &PeriodicElement) -> Vec<String> {
    vec![el.position.to_string(), el.name.clone(), el.weight.to_string(), el.symbol.clone()]
}

// =============================================================
// merge_update
// =============================================================

#[test]
fn merge_update_replaces_lithium_in_both_views_without_filter() {
    let mut state = ElementsState::default();
    let before = state.clone();

    assert!(state.merge_update(lithium_x()));

    assert_eq!(state.elements[2], lithium_x());
    assert_eq!(state.filtered_elements[2], lithium_x());
    for i in (0..10).filter(|&i| i != 2) {
        assert_eq!(state.elements[i], before.elements[i]);
        assert_eq!(state.filtered_elements[i], before.filtered_elements[i]);
    }
}

#[test]
fn merge_update_unknown_position_is_a_noop() {
    let mut state = ElementsState::default();
    state.apply_filter("n");
    let before = state.clone();

    assert!(!state.merge_update(PeriodicElement::new(42, "Molybdenum", 95.95, "Mo")));
    assert_eq!(state, before);
}

#[test]
fn merge_update_keeps_filter_and_replaces_matching_row_in_place() {
    let mut state = ElementsState::default();
    state.apply_filter("li");
    assert_eq!(positions(&state.filtered_elements), vec![2, 3, 4]);

    let edited = PeriodicElement::new(4, "Beryllium-II", 9.0122, "Be");
    assert!(state.merge_update(edited.clone()));

    assert_eq!(positions(&state.filtered_elements), vec![2, 3, 4]);
    assert_eq!(state.filtered_elements[2], edited);
    assert_eq!(state.elements[3], edited);
}

#[test]
fn merge_update_recomputes_with_active_filter() {
    let mut state = ElementsState::default();
    state.apply_filter("he");

    // The edit no longer contains "he", so it drops out of the view.
    assert!(state.merge_update(PeriodicElement::new(2, "Noble", 4.0026, "Nb")));
    assert!(state.filtered_elements.is_empty());

    // And an edit that starts matching shows up.
    assert!(state.merge_update(PeriodicElement::new(8, "Oxhenium", 15.9994, "O")));
    assert_eq!(positions(&state.filtered_elements), vec![8]);
}

#[test]
fn merge_then_clear_filter_shows_edited_record() {
    let mut state = ElementsState::default();
    state.apply_filter("carbon");
    assert!(state.merge_update(lithium_x()));
    state.apply_filter("");
    assert_eq!(state.filtered_elements[2], lithium_x());
}

// =============================================================
// apply_edit_outcome
// =============================================================

#[test]
fn confirmed_outcome_merges_edit() {
    let mut state = ElementsState::default();
    assert!(state.apply_edit_outcome(EditOutcome::Confirmed(lithium_x())));
    assert_eq!(state.find(3), Some(&lithium_x()));
}

#[test]
fn cancelled_dialog_leaves_state_unchanged() {
    let mut state = ElementsState::default();
    state.apply_filter("o");
    let before = state.clone();

    let mut edit = EditState::default();
    let lithium = state.elements[2].clone();
    edit.open(&lithium);
    edit.set_field(crate::state::edit::DraftField::Name, "Changed".to_owned())
        .unwrap();
    let outcome = edit.cancel().unwrap();

    assert!(!state.apply_edit_outcome(outcome));
    assert_eq!(state, before);
}

#[test]
fn find_returns_none_for_unknown_position() {
    let state = ElementsState::default();
    assert!(state.find(0).is_none());
    assert_eq!(state.find(6).map(|el| el.symbol.as_str()), Some("C"));
}
