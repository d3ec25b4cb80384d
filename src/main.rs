mod app;
mod components;
mod core;
mod features;
mod pages;
#[cfg(test)]
mod testing;

use leptos::prelude::*;

use crate::app::App;
use crate::core::config::AppConfig;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env();
    // Only fails if a logger is already installed
    let _ = console_log::init_with_level(config.log_level);
    log::info!("Starting todo chat client against {}", config.api_base_url);

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
