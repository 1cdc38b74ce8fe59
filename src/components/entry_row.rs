//! Entry Row Component
//!
//! One entry's fields and the three actions a row can request.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::models::{format_amount, Entry, EntryId};

/// What a row asks its owner to do. Rows never talk to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowIntent {
    Delete(EntryId),
    EditEntry(EntryId),
    EditIngredients(EntryId),
}

/// Display strings for one entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: EntryId,
    pub dish: String,
    pub ingredients: String,
    pub calories: String,
    pub fat: String,
}

impl From<&Entry> for RowView {
    fn from(entry: &Entry) -> Self {
        Self {
            id: entry.id.clone(),
            dish: entry.dish.clone(),
            ingredients: entry.ingredients.clone(),
            calories: format!("{} kcal", format_amount(entry.calories)),
            fat: format!("{} g fat", format_amount(entry.fat)),
        }
    }
}

/// A single entry row
#[component]
pub fn EntryRow(row: RowView, #[prop(into)] on_intent: Callback<RowIntent>) -> impl IntoView {
    let prompt = format!("Delete \"{}\"?", row.dish);
    let id = row.id;
    let edit_id = id.clone();
    let ingredients_id = id.clone();

    view! {
        <div class="entry-row">
            <div class="entry-fields">
                <span class="entry-dish">{row.dish}</span>
                <span class="entry-ingredients">{row.ingredients}</span>
                <span class="entry-calories">{row.calories}</span>
                <span class="entry-fat">{row.fat}</span>
            </div>
            <div class="entry-actions">
                <button
                    class="edit-btn"
                    on:click=move |_| on_intent.run(RowIntent::EditIngredients(ingredients_id.clone()))
                >
                    "Change ingredients"
                </button>
                <button
                    class="edit-btn"
                    on:click=move |_| on_intent.run(RowIntent::EditEntry(edit_id.clone()))
                >
                    "Change entry"
                </button>
                <DeleteConfirmButton
                    button_class="delete-btn"
                    prompt=prompt
                    on_confirm=move || on_intent.run(RowIntent::Delete(id.clone()))
                />
            </div>
        </div>
    }
}
