//! Catalog Viewer Frontend Entry Point

mod models;
mod config;
mod filter;
mod api;
mod pager;
mod store;
mod display;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
