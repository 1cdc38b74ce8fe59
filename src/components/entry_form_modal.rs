//! Entry Form Modal
//!
//! Dish / ingredients / calories / fat form shared by the "add entry" and
//! "change entry" flows. Each flow binds its own draft.

use leptos::prelude::*;

use crate::models::{DraftEntry, DraftField};

/// One keystroke's worth of form input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldInput {
    pub field: DraftField,
    pub value: String,
}

#[component]
pub fn EntryFormModal(
    title: &'static str,
    submit_label: &'static str,
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] draft: Signal<DraftEntry>,
    #[prop(into)] on_input: Callback<FieldInput>,
    #[prop(into)] on_submit: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| on_cancel.run(())>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h2>{title}</h2>
                        <button class="close-btn" on:click=move |_| on_cancel.run(())>"×"</button>
                    </div>
                    <form
                        class="modal-body"
                        on:submit=move |ev: web_sys::SubmitEvent| {
                            ev.prevent_default();
                            on_submit.run(());
                        }
                    >
                        {DraftField::ALL
                            .into_iter()
                            .map(|field| {
                                let input_type = if field.is_numeric() { "number" } else { "text" };
                                view! {
                                    <label class="form-field">
                                        <span>{field.label()}</span>
                                        <input
                                            type=input_type
                                            step="any"
                                            prop:value=move || draft.with(|d| d.get(field).to_string())
                                            on:input=move |ev| {
                                                on_input.run(FieldInput {
                                                    field,
                                                    value: event_target_value(&ev),
                                                });
                                            }
                                        />
                                    </label>
                                }
                            })
                            .collect_view()}
                        <div class="modal-actions">
                            <button type="submit">{submit_label}</button>
                            <button type="button" on:click=move |_| on_cancel.run(())>"Cancel"</button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
