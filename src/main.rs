// src/main.rs
mod api;
mod app;
mod config;
mod error;
mod flows;
mod logging;
mod model;
mod state;
mod view;

use app::{App, AppProps};
use config::BoardConfig;

fn main() {
    logging::init();
    let config = BoardConfig::from_page();
    log::debug!("starting activity board with {config:?}");
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
