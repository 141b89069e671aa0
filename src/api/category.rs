//! Category Requests

use super::{get_json, FetchResult};
use crate::config::ApiConfig;
use crate::models::Category;

pub async fn list_categories(config: &ApiConfig) -> FetchResult<Vec<Category>> {
    get_json(&config.categories_url()).await
}
