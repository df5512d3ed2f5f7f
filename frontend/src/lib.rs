//! Browser entry point for the Docview site.

use app::App;
use wasm_bindgen::prelude::*;

/// Log level for the browser console.
fn console_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

/// Installs the panic hook and console logger, then mounts the app.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(console_level()) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }

    log::info!("mounting docview {}", env!("CARGO_PKG_VERSION"));
    leptos::mount::mount_to_body(App);
}

