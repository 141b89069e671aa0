//! API Configuration
//!
//! Where the catalog service lives. Provided to components via context.

use leptos::prelude::*;

/// Public deployment of the catalog service
pub const DEFAULT_API_BASE: &str = "https://nestjs-pokedex-api.vercel.app";

/// Collection path of items on the public deployment
pub const DEFAULT_ITEMS_PATH: &str = "pokemons";

/// Path of the category collection
pub const CATEGORIES_PATH: &str = "types";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Base URL without trailing slash
    pub base_url: String,
    /// Item collection path segment, e.g. `items`
    pub items_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE, DEFAULT_ITEMS_PATH)
    }
}

impl ApiConfig {
    pub fn new(base_url: &str, items_path: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            items_path: items_path.trim_matches('/').to_string(),
        }
    }

    /// `{base}/{items}`
    pub fn items_url(&self) -> String {
        format!("{}/{}", self.base_url, self.items_path)
    }

    /// `{base}/{items}/{id}`
    pub fn item_url(&self, id: u32) -> String {
        format!("{}/{}", self.items_url(), id)
    }

    /// `{base}/types`
    pub fn categories_url(&self) -> String {
        format!("{}/{}", self.base_url, CATEGORIES_PATH)
    }
}

/// Get the API config from context, falling back to the public service
pub fn use_api_config() -> ApiConfig {
    use_context::<ApiConfig>().unwrap_or_default()
}
