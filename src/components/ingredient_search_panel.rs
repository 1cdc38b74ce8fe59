//! Ingredient Search Panel
//!
//! Finds entries by ingredient through the backend's ingredient route.

use leptos::prelude::*;

use crate::components::{EntryList, RowIntent};
use crate::context::use_app_context;

#[component]
pub fn IngredientSearchPanel(#[prop(into)] on_intent: Callback<RowIntent>) -> impl IntoView {
    let ctx = use_app_context();
    let (query, set_query) = signal(String::new());
    let search = Memo::new(move |_| ctx.state.with(|s| s.search.clone()));

    let run_search = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = query.get();
        ctx.spawn(move |c| async move { c.search_by_ingredient(&text).await });
    };

    let clear = move |_| {
        set_query.set(String::new());
        ctx.with(|c| c.clear_search());
    };

    view! {
        <section class="ingredient-search">
            <form class="search-form" on:submit=run_search>
                <input
                    type="text"
                    placeholder="Find by ingredient..."
                    prop:value=move || query.get()
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                />
                <button type="submit">"Find"</button>
                <button type="button" on:click=clear>"Clear"</button>
            </form>
            <Show when=move || search.with(|s| s.is_some())>
                <h3 class="search-title">
                    {move || search.with(|s| {
                        s.as_ref().map(|s| format!("Entries with \"{}\"", s.query)).unwrap_or_default()
                    })}
                </h3>
                <EntryList
                    entries=Signal::derive(move || {
                        search.with(|s| s.as_ref().map(|s| s.results.clone()).unwrap_or_default())
                    })
                    on_intent=on_intent
                    empty_text="No entries use that ingredient."
                />
            </Show>
        </section>
    }
}
