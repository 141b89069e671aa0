//! Item List Component
//!
//! Infinite-scroll grid. The `Pager` owns the state; this component wires it
//! to the filter signal, the fetches and the end-of-list sentinel.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_visibility::{use_visibility_sensor, ReportGate, SensorOptions, VisibilityReport};

use crate::api;
use crate::components::ItemCard;
use crate::config::use_api_config;
use crate::filter::CatalogFilter;
use crate::pager::{PageTicket, Pager, Resolution};

/// Next page for a sensor report, if the report is new and shows the sentinel
fn advance_on_report(pager: &mut Pager, gate: &mut ReportGate, report: VisibilityReport) -> Option<PageTicket> {
    if !gate.accept(report) {
        return None;
    }
    pager.advance()
}

#[component]
pub fn ItemList(#[prop(into)] filter: Signal<CatalogFilter>) -> impl IntoView {
    let config = StoredValue::new(use_api_config());
    let pager = RwSignal::new(Pager::new());
    let sentinel = NodeRef::<leptos::html::Div>::new();
    let sensor = use_visibility_sensor(sentinel, SensorOptions::default());

    // Run one ticket's fetch and hand the outcome back to the pager
    let fetch_page = move |ticket: PageTicket| {
        let config = config.get_value();
        web_sys::console::log_1(&format!(
            "[ItemList] Fetching epoch={} page={} ({})",
            ticket.epoch, ticket.page, ticket.query.to_query_string()
        ).into());
        spawn_local(async move {
            let result = api::list_items(&config, &ticket.query).await;
            match pager.try_update(|p| p.resolve(&ticket, result)) {
                Some(Resolution::Appended(count)) => {
                    web_sys::console::log_1(&format!("[ItemList] Page {} appended {} items", ticket.page, count).into());
                }
                Some(Resolution::Failed(e)) => {
                    web_sys::console::error_1(&format!("[ItemList] Error fetching page {}: {}", ticket.page, e).into());
                }
                Some(Resolution::Stale) => {
                    web_sys::console::log_1(&format!("[ItemList] Discarded stale page {} of epoch {}", ticket.page, ticket.epoch).into());
                }
                // List was unmounted
                None => {}
            }
        });
    };

    // Filter change: new epoch starting at page 1
    Effect::new(move |_| {
        let current = filter.get();
        if let Some(ticket) = pager.try_update(|p| p.reset(current)) {
            fetch_page(ticket);
        }
    });

    // Changes only when a page is appended, not on failures
    let settled_pages = Memo::new(move |_| pager.with(|p| p.settled_pages()));

    // An appended page moves the sentinel, so the last reading is out of date
    Effect::new(move |previous: Option<u64>| {
        let settled = settled_pages.get();
        if previous.is_some_and(|previous| previous != settled) {
            sensor.recheck();
        }
        settled
    });

    // End-of-list sensor: every fresh report that shows the sentinel asks
    // for the next page
    Effect::new(move |gate: Option<ReportGate>| {
        let mut gate = gate.unwrap_or_default();
        let report = sensor.report();
        if let Some(ticket) = pager.try_update(|p| advance_on_report(p, &mut gate, report)).flatten() {
            fetch_page(ticket);
        }
        gate
    });

    let rows = move || {
        pager.with(|p| {
            let epoch = p.epoch();
            p.items()
                .iter()
                .cloned()
                .enumerate()
                .map(|(position, item)| ((epoch, position), item))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="item-list">
            <div class="item-grid">
                <For
                    each=rows
                    // Pages are appended verbatim, so ids may repeat
                    key=|(slot, item)| (*slot, item.id)
                    children=move |(_, item)| view! { <ItemCard item=item /> }
                />
            </div>

            <Show when=move || pager.with(|p| p.is_empty_result())>
                <p class="empty-state">"No items match these filters."</p>
            </Show>

            <Show when=move || pager.with(|p| p.is_exhausted() && !p.items().is_empty())>
                <p class="end-of-list">"No more items."</p>
            </Show>

            <div node_ref=sentinel class="list-sentinel">
                <Show when=move || pager.with(|p| p.is_loading())>
                    <div class="loading">"Loading..."</div>
                </Show>
            </div>
        </div>
    }
}
