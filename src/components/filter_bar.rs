//! Filter Bar Component
//!
//! Search input, category picker and page size selector. Every change is
//! reported immediately as a complete new filter snapshot.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{CategoryBadge, PageSizeSelector};
use crate::config::use_api_config;
use crate::filter::{CatalogFilter, PageSize};
use crate::store::{store_categories, store_find_category, store_has_categories, store_set_categories, use_catalog_store};

/// Category dropdown with an "All" entry
#[component]
fn CategoryPicker(
    #[prop(into)] selected: Signal<Option<u32>>,
    #[prop(into)] on_select: Callback<Option<u32>>,
) -> impl IntoView {
    let store = use_catalog_store();
    let (open, set_open) = signal(false);

    let choose = move |category: Option<u32>| {
        set_open.set(false);
        on_select.run(category);
    };

    view! {
        <div class="category-picker">
            <button
                type="button"
                class="category-picker-button"
                on:click=move |_| set_open.update(|open| *open = !*open)
            >
                {move || match selected.get().and_then(|id| store_find_category(&store, id)) {
                    Some(category) => view! { <CategoryBadge category=category /> }.into_any(),
                    None => view! { <span>"Type"</span> }.into_any(),
                }}
            </button>

            <Show when=move || open.get()>
                <ul class="category-options">
                    <li
                        class="category-option"
                        class:active=move || selected.get().is_none()
                        on:click=move |_| choose(None)
                    >
                        "All"
                    </li>
                    <For
                        each=move || store_categories(&store)
                        key=|category| category.id
                        children=move |category| {
                            let id = category.id;
                            view! {
                                <li
                                    class="category-option"
                                    class:active=move || selected.get() == Some(id)
                                    on:click=move |_| choose(Some(id))
                                >
                                    <CategoryBadge category=category />
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}

/// Top bar with all three filter controls
#[component]
pub fn FilterBar(
    #[prop(into)] filter: Signal<CatalogFilter>,
    #[prop(into)] on_change: Callback<CatalogFilter>,
) -> impl IntoView {
    let store = use_catalog_store();
    let config = StoredValue::new(use_api_config());

    // Load categories once on mount (kept in the store across pages)
    Effect::new(move |_| {
        if store_has_categories(&store) {
            return;
        }
        let config = config.get_value();
        spawn_local(async move {
            match api::list_categories(&config).await {
                Ok(categories) => {
                    web_sys::console::log_1(&format!("[FilterBar] Loaded {} categories", categories.len()).into());
                    store_set_categories(&store, categories);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[FilterBar] Error fetching categories: {}", e).into());
                }
            }
        });
    });

    let selected_category = Signal::derive(move || filter.with(|f| f.category));
    let page_size = Signal::derive(move || filter.with(|f| f.page_size));

    view! {
        <nav class="filter-bar">
            <div class="filter-bar-title">"Pokedex"</div>

            <div class="filter-bar-controls">
                <div class="search-box">
                    <span class="search-icon">"🔍"</span>
                    <input
                        type="text"
                        placeholder="Search"
                        prop:value=move || filter.with(|f| f.query.clone())
                        on:input=move |ev| {
                            let next = filter.get_untracked().with_query(event_target_value(&ev));
                            on_change.run(next);
                        }
                    />
                </div>

                <CategoryPicker
                    selected=selected_category
                    on_select={move |category: Option<u32>| on_change.run(filter.get_untracked().with_category(category))}
                />

                <PageSizeSelector
                    current=page_size
                    on_change={move |size: PageSize| on_change.run(filter.get_untracked().with_page_size(size))}
                />
            </div>
        </nav>
    }
}
