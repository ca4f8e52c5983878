//! Browser entry point: logging, runtime configuration, mount.

use docuhub_app::{App, CONFIG_URL, fetch_config};
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // Errs only when a logger is already installed.
    let _ = console_log::init_with_level(log_level());

    wasm_bindgen_futures::spawn_local(async {
        let config = fetch_config(CONFIG_URL).await;
        log::info!(
            "starting editor against {}/api/v1/{}",
            config.api_base,
            config.endpoint_style.segment()
        );
        mount_to_body(move || view! { <App config=config /> });
    });
}
