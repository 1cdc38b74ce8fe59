//! Entry List State
//!
//! Local view of the entry collection plus the modal, draft and status
//! state that gates the create/edit flows. Pure data: the controller runs
//! requests and feeds their results in through the `apply_*` transitions.

use log::{debug, warn};

use crate::error::ApiError;
use crate::models::{DraftEntry, DraftField, Entry, EntryId, EntryTotals};

/// A mutating request, identified for status and modal bookkeeping
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    Create,
    UpdateEntry(EntryId),
    UpdateIngredients(EntryId),
    Delete(EntryId),
}

impl Mutation {
    fn describe(&self) -> String {
        match self {
            Mutation::Create => "add the entry".to_string(),
            Mutation::UpdateEntry(id) => format!("update entry {}", id),
            Mutation::UpdateIngredients(id) => format!("change ingredients of entry {}", id),
            Mutation::Delete(id) => format!("delete entry {}", id),
        }
    }
}

/// User-visible failure notice. `seq` increases with every new message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub seq: u32,
    pub text: String,
}

/// Active find-by-ingredient query and its last successful result
#[derive(Debug, Clone, PartialEq)]
pub struct IngredientSearch {
    pub query: String,
    pub results: Vec<Entry>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryListState {
    /// Entries as last returned by the server
    pub entries: Vec<Entry>,
    pub create_modal_open: bool,
    pub edit_entry_target: Option<EntryId>,
    pub edit_ingredients_target: Option<EntryId>,
    pub create_draft: DraftEntry,
    pub edit_draft: DraftEntry,
    pub ingredients_draft: String,
    pub status: Option<StatusMessage>,
    pub search: Option<IngredientSearch>,
    needs_refresh: bool,
    next_status_seq: u32,
    search_generation: u32,
}

impl EntryListState {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn needs_refresh(&self) -> bool {
        self.needs_refresh
    }

    /// Clear the refresh flag, returning whether a fetch is due.
    pub fn take_refresh(&mut self) -> bool {
        std::mem::take(&mut self.needs_refresh)
    }

    pub fn entry(&self, id: &EntryId) -> Option<&Entry> {
        self.entries.iter().find(|entry| &entry.id == id)
    }

    pub fn totals(&self) -> EntryTotals {
        EntryTotals::of(&self.entries)
    }

    // ========================
    // Modals
    // ========================

    pub fn open_create(&mut self) {
        self.create_draft = DraftEntry::default();
        self.create_modal_open = true;
    }

    pub fn close_create(&mut self) {
        self.create_modal_open = false;
        self.create_draft = DraftEntry::default();
    }

    /// Open the edit form seeded with the entry's current values
    pub fn open_edit_entry(&mut self, id: EntryId) {
        self.edit_draft = self.entry(&id).map(DraftEntry::from_entry).unwrap_or_default();
        self.edit_entry_target = Some(id);
    }

    pub fn close_edit_entry(&mut self) {
        self.edit_entry_target = None;
        self.edit_draft = DraftEntry::default();
    }

    pub fn open_edit_ingredients(&mut self, id: EntryId) {
        self.ingredients_draft = self
            .entry(&id)
            .map(|entry| entry.ingredients.clone())
            .unwrap_or_default();
        self.edit_ingredients_target = Some(id);
    }

    pub fn close_edit_ingredients(&mut self) {
        self.edit_ingredients_target = None;
        self.ingredients_draft.clear();
    }

    pub fn set_create_field(&mut self, field: DraftField, value: String) {
        self.create_draft.set(field, value);
    }

    pub fn set_edit_field(&mut self, field: DraftField, value: String) {
        self.edit_draft.set(field, value);
    }

    pub fn set_ingredients_draft(&mut self, value: String) {
        self.ingredients_draft = value;
    }

    // ========================
    // Request Results
    // ========================

    /// Replace the collection wholesale on success; keep it on failure.
    pub fn apply_loaded(&mut self, result: Result<Vec<Entry>, ApiError>) {
        match result {
            Ok(entries) => self.entries = entries,
            Err(e) => self.report(format!("Could not load entries: {}", e)),
        }
    }

    /// Record a mutation's outcome. Success marks the list stale and closes
    /// the flow's modal; failure leaves everything as it was.
    pub fn apply_mutation(&mut self, mutation: Mutation, result: Result<(), ApiError>) {
        if let Err(e) = result {
            self.report(format!("Could not {}: {}", mutation.describe(), e));
            return;
        }

        match &mutation {
            Mutation::Create => self.close_create(),
            Mutation::UpdateEntry(id) => {
                if self.edit_entry_target.as_ref() == Some(id) {
                    self.close_edit_entry();
                }
            }
            Mutation::UpdateIngredients(id) => {
                if self.edit_ingredients_target.as_ref() == Some(id) {
                    self.close_edit_ingredients();
                }
            }
            Mutation::Delete(_) => {}
        }
        self.needs_refresh = true;
    }

    /// Start a new search, invalidating any response still in flight.
    pub fn begin_search(&mut self) -> u32 {
        self.search_generation = self.search_generation.wrapping_add(1);
        self.search_generation
    }

    /// Results from a superseded or cleared search are dropped.
    pub fn apply_search(
        &mut self,
        generation: u32,
        query: String,
        result: Result<Vec<Entry>, ApiError>,
    ) {
        if generation != self.search_generation {
            debug!("Dropping stale search results for \"{}\"", query);
            return;
        }
        match result {
            Ok(results) => self.search = Some(IngredientSearch { query, results }),
            Err(e) => self.report(format!("Could not search for \"{}\": {}", query, e)),
        }
    }

    pub fn clear_search(&mut self) {
        self.search_generation = self.search_generation.wrapping_add(1);
        self.search = None;
    }

    // ========================
    // Status
    // ========================

    fn report(&mut self, text: String) {
        warn!("{}", text);
        self.next_status_seq = self.next_status_seq.wrapping_add(1);
        self.status = Some(StatusMessage {
            seq: self.next_status_seq,
            text,
        });
    }

    /// Hide the status message, unless a newer one has replaced it
    pub fn dismiss_status(&mut self, seq: u32) {
        if self.status.as_ref().map(|s| s.seq) == Some(seq) {
            self.status = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_entry(id: u64, dish: &str, ingredients: &str) -> Entry {
        Entry {
            id: EntryId::from(id),
            dish: dish.to_string(),
            ingredients: ingredients.to_string(),
            calories: Some(100.0),
            fat: Some(1.0),
        }
    }

    fn loaded_state() -> EntryListState {
        let mut state = EntryListState::new();
        state.apply_loaded(Ok(vec![
            make_entry(1, "Toast", "bread"),
            make_entry(2, "Salad", "lettuce"),
        ]));
        state
    }

    #[test]
    fn test_take_refresh_clears_flag() {
        let mut state = loaded_state();
        state.apply_mutation(Mutation::Delete(EntryId::from(1)), Ok(()));
        assert!(state.needs_refresh());

        assert!(state.take_refresh());
        assert!(!state.needs_refresh());
        assert!(!state.take_refresh());
    }

    #[test]
    fn test_failed_load_keeps_entries() {
        let mut state = loaded_state();
        state.apply_loaded(Err(ApiError::Status(500)));
        assert_eq!(state.entries.len(), 2);
        assert!(state.status.is_some());
    }

    #[test]
    fn test_failed_mutation_changes_nothing_but_status() {
        let mut state = loaded_state();
        state.open_edit_entry(EntryId::from(2));
        let before = state.clone();

        state.apply_mutation(
            Mutation::UpdateEntry(EntryId::from(2)),
            Err(ApiError::Network("offline".to_string())),
        );
        assert!(!state.needs_refresh());
        assert_eq!(state.entries, before.entries);
        assert_eq!(state.edit_entry_target, Some(EntryId::from(2)));
        assert_eq!(
            state.status.as_ref().map(|s| s.text.as_str()),
            Some("Could not update entry 2: network error: offline")
        );
    }

    #[test]
    fn test_drafts_do_not_bleed_between_flows() {
        let mut state = loaded_state();
        state.open_create();
        state.set_create_field(DraftField::Dish, "Pancakes".to_string());
        state.close_create();

        state.open_edit_entry(EntryId::from(1));
        assert_eq!(state.edit_draft.dish, "Toast");
        state.set_edit_field(DraftField::Dish, "French toast".to_string());

        state.open_create();
        assert_eq!(state.create_draft, DraftEntry::default());
        assert_eq!(state.edit_draft.dish, "French toast");
    }

    #[test]
    fn test_successful_create_closes_modal_and_resets_draft() {
        let mut state = loaded_state();
        state.open_create();
        state.set_create_field(DraftField::Dish, "Soup".to_string());

        state.apply_mutation(Mutation::Create, Ok(()));
        assert!(!state.create_modal_open);
        assert_eq!(state.create_draft, DraftEntry::default());
        assert!(state.needs_refresh());
    }

    #[test]
    fn test_open_edit_ingredients_seeds_current_text() {
        let mut state = loaded_state();
        state.open_edit_ingredients(EntryId::from(2));
        assert_eq!(state.ingredients_draft, "lettuce");

        state.apply_mutation(Mutation::UpdateIngredients(EntryId::from(2)), Ok(()));
        assert_eq!(state.edit_ingredients_target, None);
        assert!(state.ingredients_draft.is_empty());
    }

    #[test]
    fn test_open_edit_for_unknown_id_starts_blank() {
        let mut state = loaded_state();
        state.open_edit_entry(EntryId::from(99));
        assert_eq!(state.edit_entry_target, Some(EntryId::from(99)));
        assert_eq!(state.edit_draft, DraftEntry::default());
    }

    #[test]
    fn test_dismiss_ignores_stale_sequence() {
        let mut state = EntryListState::new();
        state.apply_loaded(Err(ApiError::Status(502)));
        let first = state.status.as_ref().map(|s| s.seq).unwrap();
        state.apply_loaded(Err(ApiError::Status(503)));

        state.dismiss_status(first);
        assert!(state.status.is_some());

        let second = state.status.as_ref().map(|s| s.seq).unwrap();
        state.dismiss_status(second);
        assert!(state.status.is_none());
    }

    #[test]
    fn test_failed_search_keeps_previous_results() {
        let mut state = EntryListState::new();
        let eggs = state.begin_search();
        state.apply_search(eggs, "eggs".to_string(), Ok(vec![make_entry(4, "Omelette", "eggs")]));
        let milk = state.begin_search();
        state.apply_search(milk, "milk".to_string(), Err(ApiError::Status(500)));

        let search = state.search.as_ref().unwrap();
        assert_eq!(search.query, "eggs");
        assert_eq!(search.results.len(), 1);
    }

    #[test]
    fn test_superseded_search_results_are_dropped() {
        let mut state = EntryListState::new();
        let older = state.begin_search();
        let newer = state.begin_search();

        state.apply_search(newer, "milk".to_string(), Ok(vec![make_entry(5, "Latte", "milk")]));
        state.apply_search(older, "eggs".to_string(), Ok(vec![make_entry(4, "Omelette", "eggs")]));

        let search = state.search.as_ref().unwrap();
        assert_eq!(search.query, "milk");
        assert_eq!(search.results[0].dish, "Latte");
    }

    #[test]
    fn test_clear_discards_pending_search() {
        let mut state = EntryListState::new();
        let pending = state.begin_search();
        state.clear_search();

        let late = Ok(vec![make_entry(4, "Omelette", "eggs")]);
        state.apply_search(pending, "eggs".to_string(), late);
        assert!(state.search.is_none());
        assert!(state.status.is_none());
    }
}
