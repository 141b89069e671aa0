//! Item Card Component
//!
//! Summary tile for one item; the whole tile links to its detail page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::detail_path;
use crate::components::CategoryBadge;
use crate::display::{capitalize, display_index};
use crate::models::ItemSummary;

#[component]
pub fn ItemCard(item: ItemSummary) -> impl IntoView {
    let href = detail_path(item.id);
    let index = display_index(item.pokedex_id);
    let name = capitalize(&item.name);

    view! {
        <A href=href>
            <div class="item-card">
                <div class="item-card-index">{index}</div>
                <div class="item-card-image">
                    <img src=item.image alt=item.name.clone() loading="lazy" />
                </div>
                <h2 class="item-card-name">{name}</h2>
                <div class="item-card-categories">
                    {item.categories.into_iter().map(|category| view! {
                        <CategoryBadge category=category />
                    }).collect_view()}
                </div>
            </div>
        </A>
    }
}
