mod components;
mod config;
mod error;
mod geometry;
mod model;
mod render;
mod state;

use components::app::App;

/// Site layout bundled with the app.
pub const LAYOUT_JSON: &str = include_str!("../assets/layout.json");

fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log_level());
    yew::Renderer::<App>::new().render();
}
