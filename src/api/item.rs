//! Item Requests
//!
//! Paginated listing and single-record lookup.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use super::{get_json, FetchResult};
use crate::config::ApiConfig;
use crate::filter::CatalogFilter;
use crate::models::{Item, ItemSummary};

/// Everything except RFC 3986 unreserved characters
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

// ========================
// Query
// ========================

/// Parameters of one list request
#[derive(Debug, Clone, PartialEq)]
pub struct ItemsQuery {
    pub limit: u32,
    pub page: u32,
    pub category: Option<u32>,
    pub name: Option<String>,
}

impl ItemsQuery {
    pub fn for_page(filter: &CatalogFilter, page: u32) -> Self {
        Self {
            limit: filter.page_size.get(),
            page,
            category: filter.category,
            name: filter.name_filter().map(str::to_string),
        }
    }

    /// `limit={n}&page={p}[&types[]={id}][&name={substring}]`
    pub fn to_query_string(&self) -> String {
        let mut query = format!("limit={}&page={}", self.limit, self.page);
        if let Some(category) = self.category {
            query.push_str(&format!("&types[]={}", category));
        }
        if let Some(name) = &self.name {
            query.push_str(&format!("&name={}", utf8_percent_encode(name, QUERY_VALUE)));
        }
        query
    }

    pub fn url(&self, config: &ApiConfig) -> String {
        format!("{}?{}", config.items_url(), self.to_query_string())
    }
}

// ========================
// Requests
// ========================

pub async fn list_items(config: &ApiConfig, query: &ItemsQuery) -> FetchResult<Vec<ItemSummary>> {
    get_json(&query.url(config)).await
}

/// Fetch one item; `Ok(None)` when the service answers `null`
pub async fn get_item(config: &ApiConfig, id: u32) -> FetchResult<Option<Item>> {
    get_json(&config.item_url(id)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::PageSize;

    fn test_config() -> ApiConfig {
        ApiConfig::new("https://api.test", "items")
    }

    #[test]
    fn test_first_page_without_filters() {
        let filter = CatalogFilter::default().with_page_size(PageSize::Ten);
        let query = ItemsQuery::for_page(&filter, 1);
        assert_eq!(query.url(&test_config()), "https://api.test/items?limit=10&page=1");
    }

    #[test]
    fn test_category_and_name() {
        let filter = CatalogFilter::default()
            .with_category(Some(12))
            .with_query("mr. mime");
        let query = ItemsQuery::for_page(&filter, 3);
        assert_eq!(query.to_query_string(), "limit=50&page=3&types[]=12&name=mr.%20mime");
    }

    #[test]
    fn test_name_is_encoded() {
        let filter = CatalogFilter::default().with_query("a&b=c/é");
        let query = ItemsQuery::for_page(&filter, 1);
        assert_eq!(query.to_query_string(), "limit=50&page=1&name=a%26b%3Dc%2F%C3%A9");
    }

    #[test]
    fn test_empty_query_omits_name() {
        let query = ItemsQuery::for_page(&CatalogFilter::default().with_query(""), 2);
        assert_eq!(query.name, None);
        assert!(!query.to_query_string().contains("name="));
    }
}
