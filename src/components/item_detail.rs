//! Item Detail Component
//!
//! Detail page for `/:id`: loading placeholder, error placeholder, or the
//! full record with attributes and related items.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::api::{self, FetchResult};
use crate::app::{detail_path, parse_item_id};
use crate::components::CategoryBadge;
use crate::config::use_api_config;
use crate::display::{attribute_label, capitalize, display_index, format_attribute};
use crate::models::Item;

const LOAD_ERROR_MESSAGE: &str = "Something went wrong while loading this item.";
const INVALID_ID_MESSAGE: &str = "This item does not exist.";

/// Render state of the detail page
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Loading,
    Failed(String),
    Ready(Item),
}

impl DetailState {
    /// Missing records and failed fetches both end up as `Failed`
    pub fn from_result(result: FetchResult<Option<Item>>) -> Self {
        match result {
            Ok(Some(item)) => DetailState::Ready(item),
            Ok(None) | Err(_) => DetailState::Failed(LOAD_ERROR_MESSAGE.to_string()),
        }
    }
}

/// Numbers detail fetches so only the latest navigation's response lands
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestSeq {
    current: u64,
}

impl RequestSeq {
    /// Start a request, superseding every earlier one
    pub fn begin(&mut self) -> u64 {
        self.current += 1;
        self.current
    }

    pub fn accept(&self, seq: u64) -> bool {
        seq == self.current
    }
}

/// Route component: fetches the item named by the `id` parameter
#[component]
pub fn ItemDetail() -> impl IntoView {
    let params = use_params_map();
    let config = StoredValue::new(use_api_config());
    let (state, set_state) = signal(DetailState::Loading);
    let requests = StoredValue::new(RequestSeq::default());

    Effect::new(move |_| {
        let raw_id = params.with(|p| p.get("id"));
        let Some(seq) = requests.try_update_value(RequestSeq::begin) else {
            return;
        };

        let Some(id) = raw_id.as_deref().and_then(parse_item_id) else {
            web_sys::console::error_1(&format!("[ItemDetail] Invalid id parameter: {:?}", raw_id).into());
            set_state.set(DetailState::Failed(INVALID_ID_MESSAGE.to_string()));
            return;
        };

        set_state.set(DetailState::Loading);
        let config = config.get_value();
        spawn_local(async move {
            let result = api::get_item(&config, id).await;
            if let Err(e) = &result {
                web_sys::console::error_1(&format!("[ItemDetail] Error fetching item {}: {}", id, e).into());
            }
            if requests.try_with_value(|r| r.accept(seq)) != Some(true) {
                web_sys::console::log_1(&format!("[ItemDetail] Dropped superseded response for {}", id).into());
                return;
            }
            set_state.try_set(DetailState::from_result(result));
        });
    });

    view! {
        <div class="item-detail-page">
            {move || match state.get() {
                DetailState::Loading => view! {
                    <div class="detail-loading">"Loading..."</div>
                }.into_any(),
                DetailState::Failed(message) => view! {
                    <div class="detail-error">{message}</div>
                }.into_any(),
                DetailState::Ready(item) => view! {
                    <ItemDetailView item=item />
                }.into_any(),
            }}
        </div>
    }
}

/// Back to the previous page, like the browser button
fn go_back() {
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        if let Err(e) = history.back() {
            web_sys::console::error_1(&format!("[ItemDetail] history.back failed: {:?}", e).into());
        }
    }
}

/// Populated detail view
#[component]
fn ItemDetailView(item: Item) -> impl IntoView {
    let title = capitalize(&item.name);
    let index = display_index(item.pokedex_id);

    let attributes = item.attributes.iter().map(|(key, value)| {
        let label = attribute_label(key);
        let value = format_attribute(value);
        view! {
            <div class="attribute">
                <div class="attribute-label">{label}</div>
                <div class="attribute-value">{value}</div>
            </div>
        }
    }).collect_view();

    let related = (!item.related.is_empty()).then(|| {
        let cards = item.related.iter().map(|related| {
            let href = detail_path(related.pokedex_id);
            let name = capitalize(&related.name);
            let index = display_index(related.pokedex_id);
            view! {
                <A href=href>
                    <div class="related-item">
                        <div class="related-name">{name}</div>
                        <div class="related-index">{index}</div>
                    </div>
                </A>
            }
        }).collect_view();
        view! {
            <section class="detail-related">
                <h2>"Evolutions"</h2>
                <div class="related-list">{cards}</div>
            </section>
        }
    });

    view! {
        <button class="back-btn" on:click=move |_| go_back()>"← Back"</button>

        <div class="item-detail">
            <div class="detail-header">
                <h1>{title}</h1>
                <span class="detail-index">{index}</span>
            </div>

            <div class="detail-body">
                <div class="detail-image">
                    <img src=item.image.clone() alt=item.name.clone() />
                </div>
                <div class="detail-categories">
                    {item.categories.clone().into_iter().map(|category| view! {
                        <CategoryBadge category=category icon_size=24 />
                    }).collect_view()}
                </div>
            </div>

            <section class="detail-attributes">
                <h2>"Stats"</h2>
                <div class="attribute-grid">{attributes}</div>
            </section>

            {related}
        </div>
    }
}
