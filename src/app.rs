//! Catalog Viewer App
//!
//! Root component: context, routes and the catalog page.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;
use reactive_stores::Store;

use crate::components::{FilterBar, ItemDetail, ItemList};
use crate::config::ApiConfig;
use crate::filter::CatalogFilter;
use crate::store::{store_filter, store_set_filter, use_catalog_store, CatalogState};

/// Route of an item's detail page
pub fn detail_path(id: u32) -> String {
    format!("/{}", id)
}

/// Parse the `:id` route segment
pub fn parse_item_id(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

#[component]
pub fn App() -> impl IntoView {
    // Provide context to all children
    provide_context(ApiConfig::default());
    provide_context(Store::new(CatalogState::default()));

    view! {
        <Router>
            <main class="app-layout">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=CatalogPage />
                    <Route path=path!("/:id") view=ItemDetail />
                </Routes>
            </main>
        </Router>
    }
}

/// Filter bar over the infinite-scroll grid
#[component]
fn CatalogPage() -> impl IntoView {
    let store = use_catalog_store();
    let filter = Signal::derive(move || store_filter(&store));

    let on_filter_change = move |next: CatalogFilter| {
        web_sys::console::log_1(&format!("[APP] Filter changed: {:?}", next).into());
        store_set_filter(&store, next);
    };

    view! {
        <FilterBar filter=filter on_change=on_filter_change />
        <ItemList filter=filter />
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <A href="/">"Back to the catalog"</A>
        </div>
    }
}
