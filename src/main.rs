//! Contact Desk Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod contact_store;
mod context;
mod error;
mod form;
mod format;
mod layout;
mod markdown;
mod models;
mod navigation;
mod observable;
mod providers;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::load();
    console_logger::init(config.log_level_filter());
    log::info!("Starting contact desk with layout '{}'", config.default_layout);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
