//! Element table state: the authoritative record list and its filtered view.
//!
//! DESIGN
//! ======
//! `filtered_elements` is never patched on its own. Every change to either
//! the records or the active filter recomputes it from `elements`, so an
//! edit made while a filter is active is reflected immediately and the view
//! can never drift from the predicate.

#[cfg(test)]
#[path = "elements_test.rs"]
mod elements_test;

use serde::{Deserialize, Serialize};

use crate::state::edit::EditOutcome;
use crate::state::filter::{filter_elements, normalize_filter};

/// One row of the periodic table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PeriodicElement {
    /// Atomic number. Stable identity of the record; never edited.
    pub position: u32,
    pub name: String,
    /// Standard atomic weight.
    pub weight: f64,
    pub symbol: String,
}

impl PeriodicElement {
    pub fn new(position: u32, name: impl Into<String>, weight: f64, symbol: impl Into<String>) -> Self {
        Self { position, name: name.into(), weight, symbol: symbol.into() }
    }

    /// Weight as shown in the table and matched by the filter.
    pub fn weight_text(&self) -> String {
        self.weight.to_string()
    }
}

const ELEMENT_DATA: [(u32, &str, f64, &str); 10] = [
    (1, "Hydrogen", 1.0079, "H"),
    (2, "Helium", 4.0026, "He"),
    (3, "Lithium", 6.941, "Li"),
    (4, "Beryllium", 9.0122, "Be"),
    (5, "Boron", 10.811, "B"),
    (6, "Carbon", 12.0107, "C"),
    (7, "Nitrogen", 14.0067, "N"),
    (8, "Oxygen", 15.9994, "O"),
    (9, "Fluorine", 18.9984, "F"),
    (10, "Neon", 20.1797, "Ne"),
];

/// The static fixture the table is seeded with: hydrogen through neon.
pub fn element_data() -> Vec<PeriodicElement> {
    ELEMENT_DATA
        .iter()
        .map(|&(position, name, weight, symbol)| PeriodicElement::new(position, name, weight, symbol))
        .collect()
}

/// Records plus the view produced by the active filter.
#[derive(Clone, Debug, PartialEq)]
pub struct ElementsState {
    /// Authoritative records in position order.
    pub elements: Vec<PeriodicElement>,
    /// Subsequence of `elements` matching `active_filter`.
    pub filtered_elements: Vec<PeriodicElement>,
    /// Case-folded filter text most recently applied. Empty matches all.
    pub active_filter: String,
}

impl Default for ElementsState {
    fn default() -> Self {
        Self::new(element_data())
    }
}

impl ElementsState {
    /// Seed the store. Both views start out holding every record.
    pub fn new(records: Vec<PeriodicElement>) -> Self {
        Self { filtered_elements: records.clone(), elements: records, active_filter: String::new() }
    }

    /// Replace the active filter and recompute the filtered view.
    pub fn apply_filter(&mut self, filter_text: &str) {
        self.active_filter = normalize_filter(filter_text);
        self.refresh_filtered();
        log::debug!(
            "filter applied: {:?} matched {}/{}",
            self.active_filter,
            self.filtered_elements.len(),
            self.elements.len()
        );
    }

    /// Replace the record sharing `updated.position`.
    ///
    /// Returns `false` and leaves the state untouched when no record has
    /// that position.
    pub fn merge_update(&mut self, updated: PeriodicElement) -> bool {
        let position = updated.position;
        let Some(slot) = self.elements.iter_mut().find(|el| el.position == position) else {
            log::debug!("merge ignored: no element at position {position}");
            return false;
        };
        *slot = updated;
        self.refresh_filtered();
        log::debug!("merged element at position {position}");
        true
    }

    /// Commit the result of a closed edit dialog.
    pub fn apply_edit_outcome(&mut self, outcome: EditOutcome) -> bool {
        match outcome {
            EditOutcome::Confirmed(updated) => self.merge_update(updated),
            EditOutcome::Cancelled => false,
        }
    }

    pub fn find(&self, position: u32) -> Option<&PeriodicElement> {
        self.elements.iter().find(|el| el.position == position)
    }

    fn refresh_filtered(&mut self) {
        self.filtered_elements = filter_elements(&self.elements, &self.active_filter);
    }
}
