//! Backend Commands
//!
//! The REST operations the client issues, behind one trait so the
//! controller can run against the real backend or an in-memory fake.

mod entry;

use async_trait::async_trait;

use crate::error::ApiError;
use crate::models::{Entry, EntryId, EntryPayload, IngredientsPayload};

pub use entry::HttpEntryApi;

/// One method per backend route. Success means HTTP 200, nothing else.
///
/// Futures are `?Send`: everything runs on the browser's event loop.
#[async_trait(?Send)]
pub trait EntryApi {
    /// `GET /entries`
    async fn list_entries(&self) -> Result<Vec<Entry>, ApiError>;

    /// `GET /ingredient/{ingredient}`
    async fn list_by_ingredient(&self, ingredient: &str) -> Result<Vec<Entry>, ApiError>;

    /// `POST /entry/create`
    async fn create_entry(&self, payload: &EntryPayload) -> Result<(), ApiError>;

    /// `PUT /entry/update/{id}`
    async fn update_entry(&self, id: &EntryId, payload: &EntryPayload) -> Result<(), ApiError>;

    /// `PUT /ingredient/update/{id}`
    async fn update_ingredients(
        &self,
        id: &EntryId,
        payload: &IngredientsPayload,
    ) -> Result<(), ApiError>;

    /// `DELETE /entry/delete/{id}`
    async fn delete_entry(&self, id: &EntryId) -> Result<(), ApiError>;
}
