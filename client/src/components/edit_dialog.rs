//! Modal dialog for editing one element.

use leptos::prelude::*;

use crate::state::edit::{DraftField, EditOutcome, EditState};

/// Dialog shown while an edit session is open.
///
/// Backdrop click and Escape cancel; Enter and Save confirm. A rejected
/// confirm keeps the dialog open with the validation message shown.
/// `on_close` runs once with the session's outcome.
#[component]
pub fn EditDialog(edit: RwSignal<EditState>, on_close: Callback<EditOutcome>) -> impl IntoView {
    let field_value = move |field: DraftField| {
        edit.with(|s| s.session().map(|session| session.draft.get(field).to_owned()).unwrap_or_default())
    };
    let position = move || edit.with(|s| s.session().map(|session| session.draft.position.to_string()).unwrap_or_default());
    let title = move || edit.with(|s| s.session().map(|session| format!("Edit {}", session.seed.name)).unwrap_or_default());
    let error = move || edit.with(|s| s.error().map(ToString::to_string));

    let set_field = move |field: DraftField, value: String| {
        edit.update(|s| {
            if let Err(err) = s.set_field(field, value) {
                log::warn!("edit dialog input ignored: {err}");
            }
        });
    };

    let on_save = Callback::new(move |()| match edit.try_update(EditState::confirm) {
        Some(Ok(outcome)) => on_close.run(outcome),
        Some(Err(err)) => log::debug!("edit rejected: {err}"),
        None => {}
    });

    let on_cancel = Callback::new(move |()| {
        if let Some(Ok(outcome)) = edit.try_update(EditState::cancel) {
            on_close.run(outcome);
        }
    });

    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| match ev.key().as_str() {
        "Escape" => {
            ev.prevent_default();
            on_cancel.run(());
        }
        "Enter" => {
            ev.prevent_default();
            on_save.run(());
        }
        _ => {}
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div
                class="dialog dialog--edit-element"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev| on_keydown.run(ev)
            >
                <h2>{title}</h2>
                <label class="dialog__label">
                    "Position"
                    <input class="dialog__input" type="number" readonly=true prop:value=position/>
                </label>
                <label class="dialog__label">
                    "Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || field_value(DraftField::Name)
                        on:input=move |ev| set_field(DraftField::Name, event_target_value(&ev))
                        autofocus=true
                    />
                </label>
                <label class="dialog__label">
                    "Weight"
                    <input
                        class="dialog__input"
                        type="text"
                        inputmode="decimal"
                        prop:value=move || field_value(DraftField::Weight)
                        on:input=move |ev| set_field(DraftField::Weight, event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Symbol"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || field_value(DraftField::Symbol)
                        on:input=move |ev| set_field(DraftField::Symbol, event_target_value(&ev))
                    />
                </label>
                <Show when=move || error().is_some()>
                    <p class="dialog__danger">{move || error().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| on_save.run(())>
                        "Save"
                    </button>
                </div>
            </div>
        </div>
    }
}
