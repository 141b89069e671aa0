//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use crate::filter::CatalogFilter;
use crate::models::Category;

/// Catalog-wide state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct CatalogState {
    /// Category reference data (fetched once)
    pub categories: Vec<Category>,
    /// Current filter snapshot driving the item list
    pub filter: CatalogFilter,
}

/// Type alias for the store
pub type CatalogStore = Store<CatalogState>;

/// Get the catalog store from context
pub fn use_catalog_store() -> CatalogStore {
    expect_context::<CatalogStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Current filter (tracked)
pub fn store_filter(store: &CatalogStore) -> CatalogFilter {
    store.filter().get()
}

/// Replace the filter snapshot. Writing an equal snapshot is a no-op,
/// so re-selecting the same option does not restart the list.
pub fn store_set_filter(store: &CatalogStore, filter: CatalogFilter) -> bool {
    if store.filter().with_untracked(|current| *current == filter) {
        return false;
    }
    *store.filter().write() = filter;
    true
}

/// Categories (tracked)
pub fn store_categories(store: &CatalogStore) -> Vec<Category> {
    store.categories().get()
}

/// Whether categories were already fetched (untracked)
pub fn store_has_categories(store: &CatalogStore) -> bool {
    store.categories().with_untracked(|categories| !categories.is_empty())
}

/// Replace the category list
pub fn store_set_categories(store: &CatalogStore, categories: Vec<Category>) {
    *store.categories().write() = categories;
}

/// Look up a category by ID (tracked)
pub fn store_find_category(store: &CatalogStore, id: u32) -> Option<Category> {
    store.categories().with(|categories| categories.iter().find(|c| c.id == id).cloned())
}
