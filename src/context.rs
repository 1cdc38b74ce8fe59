//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::future::Future;

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use leptos::task::spawn_local;

use crate::commands::HttpEntryApi;
use crate::controller::EntryListController;
use crate::state::EntryListState;

pub type AppController = EntryListController<HttpEntryApi>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Latest snapshot published by the controller
    pub state: ReadSignal<EntryListState>,
    controller: StoredValue<AppController, LocalStorage>,
}

impl AppContext {
    pub fn new(state: ReadSignal<EntryListState>, controller: AppController) -> Self {
        Self {
            state,
            controller: StoredValue::new_local(controller),
        }
    }

    /// Run a synchronous controller transition
    pub fn with<R>(&self, f: impl FnOnce(&AppController) -> R) -> R {
        self.controller.with_value(f)
    }

    /// Run an async controller operation on the UI event loop
    pub fn spawn<F, Fut>(&self, op: F)
    where
        F: FnOnce(AppController) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        let controller = self.controller.get_value();
        spawn_local(op(controller));
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
