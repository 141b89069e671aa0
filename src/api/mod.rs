//! Catalog Service Client
//!
//! Typed wrappers around the remote catalog HTTP API, organized by resource.

mod item;
mod category;

use std::fmt;

use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

pub use item::*;
pub use category::*;

/// Why a request failed. Callers treat every variant as "fetch failed";
/// the detail only ends up in logs.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Transport failure (offline, CORS, aborted)
    Network(String),
    /// Non-2xx response
    Status(u16),
    /// Body was not the JSON we expected
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "Network error: {}", msg),
            FetchError::Status(code) => write!(f, "HTTP status {}", code),
            FetchError::Decode(msg) => write!(f, "Malformed response: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

pub type FetchResult<T> = Result<T, FetchError>;

/// Decode a response body
pub fn decode<T: DeserializeOwned>(body: &str) -> FetchResult<T> {
    serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))
}

fn js_error(value: wasm_bindgen::JsValue) -> FetchError {
    FetchError::Network(format!("{:?}", value))
}

/// GET `url` and decode its JSON body
pub async fn get_json<T: DeserializeOwned>(url: &str) -> FetchResult<T> {
    let window = web_sys::window().ok_or_else(|| FetchError::Network("no window".to_string()))?;
    let response = JsFuture::from(window.fetch_with_str(url)).await.map_err(js_error)?;
    let response: web_sys::Response = response.dyn_into().map_err(js_error)?;
    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }
    let body = JsFuture::from(response.text().map_err(js_error)?).await.map_err(js_error)?;
    let body = body
        .as_string()
        .ok_or_else(|| FetchError::Decode("body is not text".to_string()))?;
    decode(&body)
}
