#![allow(warnings)]
//! Habitos Frontend Entry Point

mod api;
mod app;
mod card_state;
mod components;
mod config;
mod context;
mod error;
mod greeting;
mod guard;
mod logger;
mod models;
mod nav;
mod recovery;
mod storage;
mod store;
mod suggestion_flow;
mod tabs;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    recovery::install_panic_hook();
    let config = AppConfig::load();
    logger::init(config.level_filter());
    mount_to_body(move || view! { <App config=config /> });
}
