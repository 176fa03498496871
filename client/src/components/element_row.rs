//! Table header columns and the per-element row.

#[cfg(test)]
#[path = "element_row_test.rs"]
mod element_row_test;

use leptos::prelude::*;

use crate::state::elements::PeriodicElement;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnDef {
    pub key: &'static str,
    pub label: &'static str,
}

/// Displayed columns, left to right.
pub const COLUMNS: &[ColumnDef] = &[
    ColumnDef { key: "position", label: "No." },
    ColumnDef { key: "name", label: "Name" },
    ColumnDef { key: "weight", label: "Weight" },
    ColumnDef { key: "symbol", label: "Symbol" },
    ColumnDef { key: "actions", label: "Actions" },
];

/// `<th>` cells for [`COLUMNS`].
#[component]
pub fn ElementHeader() -> impl IntoView {
    view! {
        <tr class="elements-table__header">
            {COLUMNS
                .iter()
                .map(|col| {
                    view! {
                        <th class=format!("elements-table__cell elements-table__cell--{}", col.key)>
                            {col.label}
                        </th>
                    }
                })
                .collect_view()}
        </tr>
    }
}

/// One element with an edit action.
#[component]
pub fn ElementRow(element: PeriodicElement, on_edit: Callback<PeriodicElement>) -> impl IntoView {
    let weight = element.weight_text();
    let edit_target = element.clone();
    let title = format!("Edit {}", element.name);

    view! {
        <tr class="elements-table__row">
            <td class="elements-table__cell elements-table__cell--position">{element.position}</td>
            <td class="elements-table__cell elements-table__cell--name">{element.name}</td>
            <td class="elements-table__cell elements-table__cell--weight">{weight}</td>
            <td class="elements-table__cell elements-table__cell--symbol">{element.symbol}</td>
            <td class="elements-table__cell elements-table__cell--actions">
                <button class="btn btn--icon" title=title on:click=move |_| on_edit.run(edit_target.clone())>
                    "✎"
                </button>
            </td>
        </tr>
    }
}
