//! Todo List Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod controller;
mod logger;
mod models;
mod rows;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;
use log::{info, warn};

fn main() {
    console_error_panic_hook::set_once();

    let (config, problems) = AppConfig::from_document();
    if let Err(e) = logger::init(config.log_level) {
        web_sys::console::warn_1(&format!("console logger not installed: {e}").into());
    }
    for problem in problems {
        warn!("[CONFIG] {problem}");
    }
    info!("[APP] Todo API at {}", config.api_base);

    mount_to_body(move || view! { <App config=config /> });
}
