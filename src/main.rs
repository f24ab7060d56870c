//! LifeStock Frontend Entry Point

mod app;
mod charts;
mod components;
mod config;
mod context;
mod error;
mod filter;
mod fixtures;
mod history;
mod models;
mod pages;
mod permissions;
mod routes;
mod selection;
mod store;
mod toast;
mod validation;

use app::App;
use leptos::prelude::*;
use tracing_wasm::WASMLayerConfigBuilder;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let config = WASMLayerConfigBuilder::default().set_max_level(level).build();
    tracing_wasm::set_as_global_default_with_config(config);

    tracing::info!("Starting LifeStock");
    mount_to_body(App);
}
