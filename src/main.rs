//! Household Frontend Entry Point

mod api;
mod app;
mod browser;
mod components;
mod config;
mod context;
mod models;
mod state;
mod store;

use app::App;
use config::Bootstrap;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let bootstrap = match browser::page_data_json() {
        Some(json) => Bootstrap::parse(&json).map_err(|e| format!("invalid page data: {}", e)),
        None => Err(format!("missing #{} script", config::PAGE_DATA_ID)),
    };

    let level = console_logger::parse_level(
        bootstrap.as_ref().ok().and_then(|b| b.client.log_level.as_deref()),
    );
    if console_logger::init(level).is_err() {
        log::warn!("[APP] Logger already installed");
    }

    let origin = browser::origin();
    log::info!("[APP] Starting at {}", origin);
    mount_to_body(move || view! { <App bootstrap=bootstrap origin=origin /> });
}
