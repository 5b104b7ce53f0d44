//! Taskpad Frontend Entry Point

mod api;
mod app;
mod auth;
mod components;
mod config;
mod error;
mod field_order;
mod form;
mod hooks;
mod models;
mod pages;
mod routes;
mod store;
mod validation;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_tracing::set_as_global_default();

    tracing::info!("starting Taskpad frontend");
    mount_to_body(App);
}
