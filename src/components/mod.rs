//! UI Components
//!
//! Leptos components for the entry list and its modals.

mod delete_confirm_button;
mod entry_form_modal;
mod entry_list;
mod entry_row;
mod ingredient_search_panel;
mod ingredients_modal;
mod status_banner;

pub use delete_confirm_button::DeleteConfirmButton;
pub use entry_form_modal::{EntryFormModal, FieldInput};
pub use entry_list::EntryList;
pub use entry_row::{EntryRow, RowIntent, RowView};
pub use ingredient_search_panel::IngredientSearchPanel;
pub use ingredients_modal::IngredientsModal;
pub use status_banner::StatusBanner;
