//! Ingredients Modal
//!
//! Replaces only the ingredients text of one entry.

use leptos::prelude::*;

#[component]
pub fn IngredientsModal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(into)] on_submit: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| on_cancel.run(())>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h2>"Change Ingredients"</h2>
                        <button class="close-btn" on:click=move |_| on_cancel.run(())>"×"</button>
                    </div>
                    <form
                        class="modal-body"
                        on:submit=move |ev: web_sys::SubmitEvent| {
                            ev.prevent_default();
                            on_submit.run(());
                        }
                    >
                        <label class="form-field">
                            <span>"new ingredients"</span>
                            <input
                                type="text"
                                prop:value=move || value.get()
                                on:input=move |ev| on_input.run(event_target_value(&ev))
                            />
                        </label>
                        <div class="modal-actions">
                            <button type="submit">"Change"</button>
                            <button type="button" on:click=move |_| on_cancel.run(())>"Cancel"</button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
