//! Calorie Tracker Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod controller;
mod error;
mod logging;
mod models;
mod state;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = logging::init(config::log_level()) {
        web_sys::console::error_1(&format!("Logger already installed: {}", e).into());
    }
    mount_to_body(App);
}
