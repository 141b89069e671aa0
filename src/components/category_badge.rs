//! Category Badge Component

use leptos::prelude::*;

use crate::display::capitalize;
use crate::models::Category;

/// Category icon with its capitalized name
#[component]
pub fn CategoryBadge(
    category: Category,
    #[prop(default = 20)] icon_size: u32,
) -> impl IntoView {
    let label = capitalize(&category.name);
    view! {
        <span class="category-badge">
            <img src=category.image alt=category.name width=icon_size height=icon_size />
            <span class="category-name">{label}</span>
        </span>
    }
}
