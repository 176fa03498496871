//! Periodic table page: filter input, element table, and edit dialog.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. It binds the filter input to the element table
//! through a debounced pipeline and routes edit-dialog outcomes back into
//! the table state.
//!
//! TRADE-OFFS
//! ==========
//! The filter waits for a quiet interval before recomputing. Typing feels
//! laggy but the table does not flicker on every keystroke.

use leptos::prelude::*;

use crate::components::edit_dialog::EditDialog;
use crate::components::element_row::{COLUMNS, ElementHeader, ElementRow};
use crate::state::edit::{EditOutcome, EditState};
use crate::state::elements::{ElementsState, PeriodicElement};
use crate::state::filter::{DebounceTicket, FilterDebounce};

/// Filterable element table with per-row edit.
#[component]
pub fn ElementsPage() -> impl IntoView {
    let elements = expect_context::<RwSignal<ElementsState>>();
    let edit = expect_context::<RwSignal<EditState>>();

    let filter_input = RwSignal::new(String::new());
    let debounce = RwSignal::new(FilterDebounce::new());

    // The input's initial empty value goes through the same pipeline.
    schedule_filter(debounce, elements, debounce.with_untracked(FilterDebounce::pending_ticket));

    let on_filter_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        filter_input.set(value.clone());
        if let Some(ticket) = debounce.try_update_untracked(|d| d.push(Some(value.as_str()))) {
            schedule_filter(debounce, elements, ticket);
        }
    };

    let on_edit = Callback::new(move |element: PeriodicElement| {
        edit.update(|s| {
            s.open(&element);
        });
    });

    let on_close = Callback::new(move |outcome: EditOutcome| {
        elements.update(|s| {
            s.apply_edit_outcome(outcome);
        });
    });

    let no_match = move || elements.with(|s| s.filtered_elements.is_empty());
    let empty_message = move || elements.with(|s| format!("No data matching the filter \"{}\"", s.active_filter));

    view! {
        <div class="elements-page">
            <header class="elements-page__header toolbar">
                <span class="toolbar__title">"Periodic Table"</span>
            </header>
            <label class="elements-page__filter">
                "Filter"
                <input
                    class="elements-page__filter-input"
                    type="text"
                    placeholder="Ex. Helium"
                    prop:value=move || filter_input.get()
                    on:input=on_filter_input
                />
            </label>
            <table class="elements-table">
                <thead>
                    <ElementHeader/>
                </thead>
                <tbody>
                    {move || {
                        elements
                            .get()
                            .filtered_elements
                            .into_iter()
                            .map(|element| view! { <ElementRow element=element on_edit=on_edit/> })
                            .collect::<Vec<_>>()
                    }}
                    <Show when=no_match>
                        <tr class="elements-table__empty">
                            <td colspan=COLUMNS.len().to_string()>{empty_message}</td>
                        </tr>
                    </Show>
                </tbody>
            </table>
            <Show when=move || edit.with(EditState::is_open)>
                <EditDialog edit=edit on_close=on_close/>
            </Show>
        </div>
    }
}

/// Wait out the quiet interval, then apply `ticket`'s value if it survived.
#[cfg(feature = "hydrate")]
fn schedule_filter(debounce: RwSignal<FilterDebounce>, elements: RwSignal<ElementsState>, ticket: DebounceTicket) {
    use crate::state::filter::FILTER_DEBOUNCE_MS;

    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(FILTER_DEBOUNCE_MS)).await;
        let Some(Some(text)) = debounce.try_update_untracked(|d| d.fire(ticket)) else {
            return;
        };
        if elements.try_update(|s| s.apply_filter(&text)).is_none() {
            log::debug!("element table gone before filter {text:?} applied");
        }
    });
}

/// Server rendering has no timers; the table renders unfiltered.
#[cfg(not(feature = "hydrate"))]
fn schedule_filter(_debounce: RwSignal<FilterDebounce>, _elements: RwSignal<ElementsState>, _ticket: DebounceTicket) {}
