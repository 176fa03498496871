//! Text filter for the element table: matching plus debounce bookkeeping.
//!
//! DESIGN
//! ======
//! The debounce is split in two. `FilterDebounce` is a plain value that
//! remembers the newest raw input, which ticket may still fire, and what was
//! last emitted. The page owns the actual timer and hands the ticket back
//! once the quiet interval has passed. Keeping the clock out of this module
//! makes the supersede and dedup rules testable without a browser.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use crate::state::elements::PeriodicElement;

/// Quiet interval after the last keystroke before the filter is applied.
pub const FILTER_DEBOUNCE_MS: u64 = 2000;

/// Case-fold raw filter input.
pub fn normalize_filter(raw: &str) -> String {
    raw.to_lowercase()
}

/// Stringified field values the filter is matched against, in column order.
pub fn searchable_fields(element: &PeriodicElement) -> [String; 4] {
    [element.position.to_string(), element.name.clone(), element.weight_text(), element.symbol.clone()]
}

/// True when any field of `element`, case-folded, contains `needle`.
///
/// `needle` must already be case-folded. An empty needle matches everything.
pub fn element_matches(element: &PeriodicElement, needle: &str) -> bool {
    needle.is_empty()
        || searchable_fields(element)
            .iter()
            .any(|value| value.to_lowercase().contains(needle))
}

/// Records matching `filter_text`, in their original order.
pub fn filter_elements(elements: &[PeriodicElement], filter_text: &str) -> Vec<PeriodicElement> {
    let needle = normalize_filter(filter_text);
    elements
        .iter()
        .filter(|el| element_matches(el, &needle))
        .cloned()
        .collect()
}

/// Handle for one scheduled emission. Only the newest ticket can fire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DebounceTicket(u64);

/// Debounce + distinct-until-changed state for the filter input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterDebounce {
    pending: String,
    latest: u64,
    last_emitted: Option<String>,
}

impl Default for FilterDebounce {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterDebounce {
    /// Starts with an empty pending value, as if the input emitted `""`
    /// before the user typed anything.
    pub fn new() -> Self {
        Self { pending: String::new(), latest: 0, last_emitted: None }
    }

    /// Ticket for the value currently pending.
    pub fn pending_ticket(&self) -> DebounceTicket {
        DebounceTicket(self.latest)
    }

    pub fn pending(&self) -> &str {
        &self.pending
    }

    pub fn last_emitted(&self) -> Option<&str> {
        self.last_emitted.as_deref()
    }

    /// Record a new raw input value. Missing input counts as `""`.
    ///
    /// Every ticket issued before this call is superseded.
    pub fn push(&mut self, raw: Option<&str>) -> DebounceTicket {
        self.pending = raw.unwrap_or_default().to_owned();
        self.latest += 1;
        self.pending_ticket()
    }

    /// Called once the quiet interval for `ticket` has elapsed.
    ///
    /// Returns the filter text to apply, or `None` when a newer value
    /// arrived in the meantime or the value matches the last emission.
    pub fn fire(&mut self, ticket: DebounceTicket) -> Option<String> {
        if ticket.0 != self.latest {
            return None;
        }
        if self.last_emitted.as_deref() == Some(self.pending.as_str()) {
            return None;
        }
        self.last_emitted = Some(self.pending.clone());
        Some(self.pending.clone())
    }
}
