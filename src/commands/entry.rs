//! Entry Commands
//!
//! `reqwest` bindings for the entry routes.

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use super::EntryApi;
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{Entry, EntryId, EntryPayload, IngredientsPayload};

/// HTTP client for the entries backend
#[derive(Debug, Clone)]
pub struct HttpEntryApi {
    client: Client,
    config: ApiConfig,
}

impl HttpEntryApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    async fn send(&self, label: &str, request: RequestBuilder) -> Result<Response, ApiError> {
        debug!("{} -> sending", label);
        let response = request.send().await.map_err(|e| {
            warn!("{} -> {}", label, e);
            ApiError::from(e)
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!("{} -> status {}", label, status.as_u16());
            return Err(ApiError::Status(status.as_u16()));
        }
        info!("{} -> ok", label);
        Ok(response)
    }

    /// The backend encodes an empty collection as `null`
    async fn read_list<T: DeserializeOwned>(response: Response) -> Result<Vec<T>, ApiError> {
        let body: Option<Vec<T>> = response.json().await?;
        Ok(body.unwrap_or_default())
    }
}

#[async_trait(?Send)]
impl EntryApi for HttpEntryApi {
    async fn list_entries(&self) -> Result<Vec<Entry>, ApiError> {
        let request = self.client.get(self.config.entries_url());
        let response = self.send("GET /entries", request).await?;
        Self::read_list(response).await
    }

    async fn list_by_ingredient(&self, ingredient: &str) -> Result<Vec<Entry>, ApiError> {
        let request = self.client.get(self.config.ingredient_search_url(ingredient));
        let response = self.send("GET /ingredient", request).await?;
        Self::read_list(response).await
    }

    async fn create_entry(&self, payload: &EntryPayload) -> Result<(), ApiError> {
        let request = self.client.post(self.config.create_entry_url()).json(payload);
        self.send("POST /entry/create", request).await.map(|_| ())
    }

    async fn update_entry(&self, id: &EntryId, payload: &EntryPayload) -> Result<(), ApiError> {
        let request = self.client.put(self.config.update_entry_url(id)).json(payload);
        let label = format!("PUT /entry/update/{}", id);
        self.send(&label, request).await.map(|_| ())
    }

    async fn update_ingredients(
        &self,
        id: &EntryId,
        payload: &IngredientsPayload,
    ) -> Result<(), ApiError> {
        let request = self.client.put(self.config.update_ingredients_url(id)).json(payload);
        let label = format!("PUT /ingredient/update/{}", id);
        self.send(&label, request).await.map(|_| ())
    }

    async fn delete_entry(&self, id: &EntryId) -> Result<(), ApiError> {
        let request = self.client.delete(self.config.delete_entry_url(id));
        let label = format!("DELETE /entry/delete/{}", id);
        self.send(&label, request).await.map(|_| ())
    }
}
