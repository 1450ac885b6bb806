#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod hooks;
mod pages;
mod platform;
mod theme;

use tracing::Level;

fn main() {
    if let Err(e) = dioxus::logger::init(Level::INFO) {
        eprintln!("Failed to install logger: {}", e);
    }

    tracing::info!("Starting FieldLab web");
    dioxus::launch(app::App);
}
