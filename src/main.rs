//! Arms License LIU Dashboard Entry Point

mod models;
mod config;
mod logging;
mod error;
mod api;
mod status;
mod pagination;
mod report;
mod route;
mod dialog;
mod context;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(config::log_level());
    log::info!("starting LIU dashboard against {}", config::ApiConfig::from_env().base_url);
    mount_to_body(App);
}
