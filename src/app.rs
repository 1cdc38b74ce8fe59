//! Calorie Tracker App
//!
//! Root component: wires the controller to the view and hosts the modals.

use leptos::prelude::*;
use log::info;

use crate::commands::HttpEntryApi;
use crate::components::{
    EntryFormModal, EntryList, FieldInput, IngredientSearchPanel, IngredientsModal, RowIntent,
    StatusBanner,
};
use crate::config::ApiConfig;
use crate::context::AppContext;
use crate::controller::EntryListController;
use crate::models::format_amount;

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::from_document();
    info!("Using backend at {}", config.base_url());

    // Controller publishes a snapshot after every transition
    let controller = EntryListController::new(HttpEntryApi::new(config));
    let (state, set_state) = signal(controller.snapshot());
    let controller =
        controller.with_observer(move |snapshot| set_state.set(snapshot.clone()));
    let ctx = AppContext::new(state, controller);
    provide_context(ctx);

    // Load entries on mount
    Effect::new(move |_| {
        ctx.spawn(|c| async move { c.load_all().await });
    });

    let entries = Memo::new(move |_| state.with(|s| s.entries.clone()));
    let totals = Memo::new(move |_| state.with(|s| s.totals()));

    let on_intent = Callback::new(move |intent: RowIntent| match intent {
        RowIntent::Delete(id) => ctx.spawn(move |c| async move { c.delete_entry(&id).await }),
        RowIntent::EditEntry(id) => ctx.with(|c| c.open_edit_entry(id)),
        RowIntent::EditIngredients(id) => ctx.with(|c| c.open_edit_ingredients(id)),
    });

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Calorie Tracker"</h1>
                <button class="primary-btn" on:click=move |_| ctx.with(|c| c.open_create())>
                    "Track today's calories"
                </button>
                <p class="entry-count">
                    {move || {
                        let t = totals.get();
                        format!(
                            "{} entries, {} kcal, {} g fat",
                            t.count,
                            format_amount(Some(t.calories)),
                            format_amount(Some(t.fat)),
                        )
                    }}
                </p>
            </header>

            <StatusBanner />

            <main class="main-content">
                <EntryList
                    entries=entries
                    on_intent=on_intent
                    empty_text="No entries yet."
                />
                <IngredientSearchPanel on_intent=on_intent />
            </main>

            <EntryFormModal
                title="Add Calorie Entry"
                submit_label="Add"
                open=Signal::derive(move || state.with(|s| s.create_modal_open))
                draft=Signal::derive(move || state.with(|s| s.create_draft.clone()))
                on_input=move |input: FieldInput| ctx.with(|c| c.set_create_field(input.field, input.value))
                on_submit=move || ctx.spawn(|c| async move { c.submit_create().await })
                on_cancel=move || ctx.with(|c| c.close_create())
            />

            <EntryFormModal
                title="Change Entry"
                submit_label="Change"
                open=Signal::derive(move || state.with(|s| s.edit_entry_target.is_some()))
                draft=Signal::derive(move || state.with(|s| s.edit_draft.clone()))
                on_input=move |input: FieldInput| ctx.with(|c| c.set_edit_field(input.field, input.value))
                on_submit=move || ctx.spawn(|c| async move { c.submit_edit_entry().await })
                on_cancel=move || ctx.with(|c| c.close_edit_entry())
            />

            <IngredientsModal
                open=Signal::derive(move || state.with(|s| s.edit_ingredients_target.is_some()))
                value=Signal::derive(move || state.with(|s| s.ingredients_draft.clone()))
                on_input=move |value: String| ctx.with(|c| c.set_ingredients_draft(value))
                on_submit=move || ctx.spawn(|c| async move { c.submit_edit_ingredients().await })
                on_cancel=move || ctx.with(|c| c.close_edit_ingredients())
            />
        </div>
    }
}
