//! Client Configuration
//!
//! Backend location and log level, resolved once at start-up.

use log::LevelFilter;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::models::EntryId;

/// Backend used when nothing else is configured
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Characters escaped inside a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Where the REST backend lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build-time `CALORIE_API_BASE_URL`, else the default
    pub fn from_env() -> Self {
        match option_env!("CALORIE_API_BASE_URL") {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }

    /// The host page's `calorie-api-base` meta tag wins over the build-time value
    pub fn from_document() -> Self {
        match meta_base_url() {
            Some(url) => Self::new(url),
            None => Self::from_env(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ========================
    // Routes
    // ========================

    pub fn entries_url(&self) -> String {
        format!("{}/entries", self.base_url)
    }

    pub fn create_entry_url(&self) -> String {
        format!("{}/entry/create", self.base_url)
    }

    pub fn update_entry_url(&self, id: &EntryId) -> String {
        format!("{}/entry/update/{}", self.base_url, encode_segment(id.as_str()))
    }

    pub fn update_ingredients_url(&self, id: &EntryId) -> String {
        format!("{}/ingredient/update/{}", self.base_url, encode_segment(id.as_str()))
    }

    pub fn delete_entry_url(&self, id: &EntryId) -> String {
        format!("{}/entry/delete/{}", self.base_url, encode_segment(id.as_str()))
    }

    pub fn ingredient_search_url(&self, ingredient: &str) -> String {
        format!("{}/ingredient/{}", self.base_url, encode_segment(ingredient))
    }
}

fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

#[cfg(target_arch = "wasm32")]
fn meta_base_url() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let meta = document.query_selector("meta[name=\"calorie-api-base\"]").ok()??;
    meta.get_attribute("content")
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
}

#[cfg(not(target_arch = "wasm32"))]
fn meta_base_url() -> Option<String> {
    None
}

/// Build-time `CALORIE_LOG_LEVEL`, default `info`
pub fn log_level() -> LevelFilter {
    option_env!("CALORIE_LOG_LEVEL")
        .and_then(|level| level.parse().ok())
        .unwrap_or(LevelFilter::Info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = ApiConfig::new("http://api.local:9000/");
        assert_eq!(config.base_url(), "http://api.local:9000");
        assert_eq!(config.entries_url(), "http://api.local:9000/entries");
    }

    #[test]
    fn test_route_urls() {
        let config = ApiConfig::default();
        let id = EntryId::from(7);
        assert_eq!(config.create_entry_url(), "http://localhost:8000/entry/create");
        assert_eq!(config.update_entry_url(&id), "http://localhost:8000/entry/update/7");
        assert_eq!(config.update_ingredients_url(&id), "http://localhost:8000/ingredient/update/7");
        assert_eq!(config.delete_entry_url(&id), "http://localhost:8000/entry/delete/7");
    }

    #[test]
    fn test_path_segments_are_encoded() {
        let config = ApiConfig::default();
        assert_eq!(
            config.ingredient_search_url("olive oil/extra"),
            "http://localhost:8000/ingredient/olive%20oil%2Fextra"
        );
        assert_eq!(
            config.delete_entry_url(&EntryId::new("a?b")),
            "http://localhost:8000/entry/delete/a%3Fb"
        );
    }
}
