//! Entry List Controller
//!
//! Owns the entry collection and issues the REST operations. Every mutation
//! ends in `settle`, which clears the refresh flag before re-fetching so a
//! refresh can never schedule itself again.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info};

use crate::commands::EntryApi;
use crate::error::ApiError;
use crate::models::{DraftEntry, DraftField, EntryId, IngredientsPayload};
use crate::state::{EntryListState, Mutation};

type Observer = Rc<dyn Fn(&EntryListState)>;

/// Single owner of the entry collection and the UI flags around it.
///
/// Cheap to clone; clones share the same state. The observer receives a
/// snapshot after every transition.
pub struct EntryListController<A> {
    api: Rc<A>,
    state: Rc<RefCell<EntryListState>>,
    observer: Observer,
}

impl<A> Clone for EntryListController<A> {
    fn clone(&self) -> Self {
        Self {
            api: Rc::clone(&self.api),
            state: Rc::clone(&self.state),
            observer: Rc::clone(&self.observer),
        }
    }
}

impl<A: EntryApi> EntryListController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api: Rc::new(api),
            state: Rc::new(RefCell::new(EntryListState::new())),
            observer: Rc::new(|_| {}),
        }
    }

    pub fn with_observer(mut self, observer: impl Fn(&EntryListState) + 'static) -> Self {
        self.observer = Rc::new(observer);
        self
    }

    pub fn snapshot(&self) -> EntryListState {
        self.state.borrow().clone()
    }

    /// Apply a transition, then publish the new state. The borrow ends
    /// before the observer runs.
    fn update<R>(&self, f: impl FnOnce(&mut EntryListState) -> R) -> R {
        let (result, snapshot) = {
            let mut state = self.state.borrow_mut();
            let result = f(&mut state);
            (result, state.clone())
        };
        (self.observer)(&snapshot);
        result
    }

    // ========================
    // Modal & Draft Transitions
    // ========================

    pub fn open_create(&self) {
        self.update(|s| s.open_create());
    }

    pub fn close_create(&self) {
        self.update(|s| s.close_create());
    }

    pub fn open_edit_entry(&self, id: EntryId) {
        self.update(|s| s.open_edit_entry(id));
    }

    pub fn close_edit_entry(&self) {
        self.update(|s| s.close_edit_entry());
    }

    pub fn open_edit_ingredients(&self, id: EntryId) {
        self.update(|s| s.open_edit_ingredients(id));
    }

    pub fn close_edit_ingredients(&self) {
        self.update(|s| s.close_edit_ingredients());
    }

    pub fn set_create_field(&self, field: DraftField, value: String) {
        self.update(|s| s.set_create_field(field, value));
    }

    pub fn set_edit_field(&self, field: DraftField, value: String) {
        self.update(|s| s.set_edit_field(field, value));
    }

    pub fn set_ingredients_draft(&self, value: String) {
        self.update(|s| s.set_ingredients_draft(value));
    }

    pub fn dismiss_status(&self, seq: u32) {
        self.update(|s| s.dismiss_status(seq));
    }

    // ========================
    // Requests
    // ========================

    /// Fetch the full collection and replace the local copy.
    pub async fn load_all(&self) {
        let result = self.api.list_entries().await;
        let loaded = result.is_ok();
        if let Ok(entries) = &result {
            info!("Loaded {} entries", entries.len());
        }
        self.update(|s| s.apply_loaded(result));
        if !loaded {
            return;
        }

        let active_query = self.state.borrow().search.as_ref().map(|s| s.query.clone());
        if let Some(query) = active_query {
            self.run_search(query).await;
        }
    }

    pub async fn create(&self, draft: &DraftEntry) {
        let payload = draft.to_payload();
        debug!("Creating entry {:?}", payload);
        let result = self.api.create_entry(&payload).await;
        self.commit(Mutation::Create, result).await;
    }

    pub async fn update_entry(&self, id: &EntryId, draft: &DraftEntry) {
        let payload = draft.to_payload();
        let result = self.api.update_entry(id, &payload).await;
        self.commit(Mutation::UpdateEntry(id.clone()), result).await;
    }

    pub async fn update_ingredients_only(&self, id: &EntryId, ingredients: &str) {
        let payload = IngredientsPayload {
            ingredients: ingredients.to_string(),
        };
        let result = self.api.update_ingredients(id, &payload).await;
        self.commit(Mutation::UpdateIngredients(id.clone()), result).await;
    }

    /// Issued even when `id` isn't in the local list; the server decides.
    pub async fn delete_entry(&self, id: &EntryId) {
        let result = self.api.delete_entry(id).await;
        self.commit(Mutation::Delete(id.clone()), result).await;
    }

    pub async fn submit_create(&self) {
        let draft = self.state.borrow().create_draft.clone();
        self.create(&draft).await;
    }

    pub async fn submit_edit_entry(&self) {
        let (target, draft) = {
            let state = self.state.borrow();
            (state.edit_entry_target.clone(), state.edit_draft.clone())
        };
        if let Some(id) = target {
            self.update_entry(&id, &draft).await;
        }
    }

    pub async fn submit_edit_ingredients(&self) {
        let (target, ingredients) = {
            let state = self.state.borrow();
            (state.edit_ingredients_target.clone(), state.ingredients_draft.clone())
        };
        if let Some(id) = target {
            self.update_ingredients_only(&id, &ingredients).await;
        }
    }

    /// Blank queries clear the search without a request.
    pub async fn search_by_ingredient(&self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            self.clear_search();
            return;
        }
        self.run_search(query.to_string()).await;
    }

    pub fn clear_search(&self) {
        self.update(|s| s.clear_search());
    }

    async fn run_search(&self, query: String) {
        let generation = self.update(|s| s.begin_search());
        let result = self.api.list_by_ingredient(&query).await;
        self.update(|s| s.apply_search(generation, query, result));
    }

    // ========================
    // Refresh
    // ========================

    async fn commit(&self, mutation: Mutation, result: Result<(), ApiError>) {
        self.update(|s| s.apply_mutation(mutation, result));
        self.settle().await;
    }

    /// Post-commit hook: if the list went stale, clear the flag and then
    /// fetch exactly once.
    pub async fn settle(&self) {
        if self.update(|s| s.take_refresh()) {
            debug!("Entry list stale, refreshing");
            self.load_all().await;
        }
    }
}
