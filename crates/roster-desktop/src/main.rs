//! Roster Desktop Application
//!
//! A small desktop app for finding a person in a fixed roster with a
//! debounced autocomplete input.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod config;
mod hooks;
mod state;
mod theme;
mod views;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("roster=debug".parse().unwrap()),
        )
        .init();

    tracing::info!("Starting Roster...");

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Roster")
            .with_inner_size(LogicalSize::new(560.0, 640.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::new()
        .with_cfg(config)
        .launch(app::App);
}
