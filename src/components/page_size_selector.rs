//! Page Size Selector Component
//!
//! Dropdown over the fixed page size options.

use leptos::prelude::*;

use crate::filter::PageSize;

/// Page size dropdown
#[component]
pub fn PageSizeSelector(
    #[prop(into)] current: Signal<PageSize>,
    #[prop(into)] on_change: Callback<PageSize>,
) -> impl IntoView {
    view! {
        <select
            class="page-size-select"
            on:change=move |ev| {
                let value = event_target_value(&ev);
                match value.parse::<PageSize>() {
                    Ok(size) => on_change.run(size),
                    Err(e) => web_sys::console::error_1(&format!("[FilterBar] {}", e).into()),
                }
            }
        >
            {PageSize::ALL.iter().map(|size| {
                let size = *size;
                view! {
                    <option
                        value=size.to_string()
                        prop:selected=move || current.get() == size
                    >
                        {size.to_string()}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}
