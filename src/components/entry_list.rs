//! Entry List Component
//!
//! Renders one row per entry, in server order.

use leptos::prelude::*;

use crate::components::{EntryRow, RowIntent, RowView};
use crate::models::Entry;

/// One row view per entry, in the order given
pub fn row_views(entries: &[Entry]) -> Vec<RowView> {
    entries.iter().map(RowView::from).collect()
}

#[component]
pub fn EntryList(
    #[prop(into)] entries: Signal<Vec<Entry>>,
    #[prop(into)] on_intent: Callback<RowIntent>,
    empty_text: &'static str,
) -> impl IntoView {
    view! {
        <div class="entry-list">
            {move || {
                let rows = entries.with(|entries| row_views(entries));
                if rows.is_empty() {
                    view! { <p class="empty-list">{empty_text}</p> }.into_any()
                } else {
                    rows
                        .into_iter()
                        .map(|row| view! { <EntryRow row=row on_intent=on_intent /> })
                        .collect_view()
                        .into_any()
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntryId;

    fn make_entry(id: u64, dish: &str, calories: f64) -> Entry {
        Entry {
            id: EntryId::from(id),
            dish: dish.to_string(),
            ingredients: format!("{} base", dish),
            calories: Some(calories),
            fat: None,
        }
    }

    #[test]
    fn test_one_row_per_entry_in_order() {
        let entries = vec![
            make_entry(1, "Toast", 120.0),
            make_entry(2, "Soup", 80.0),
            make_entry(3, "Rice", 200.0),
        ];
        let rows = row_views(&entries);

        assert_eq!(rows.len(), 3);
        let dishes: Vec<_> = rows.iter().map(|r| r.dish.as_str()).collect();
        assert_eq!(dishes, ["Toast", "Soup", "Rice"]);
        assert_eq!(rows[1].id, EntryId::from(2));
        assert_eq!(rows[1].ingredients, "Soup base");
        assert_eq!(rows[2].calories, "200 kcal");
        assert_eq!(rows[2].fat, "- g fat");
    }

    #[test]
    fn test_no_entries_no_rows() {
        assert!(row_views(&[]).is_empty());
    }
}
