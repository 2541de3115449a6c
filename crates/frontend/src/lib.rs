pub mod app;
pub mod dashboards;
pub mod domain;
pub mod routes;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // logs go to the browser console through the `log` facade
    _ = console_log::init_with_level(log::Level::Debug);
    log::info!("Starting travel expense reports client");

    leptos::mount::mount_to_body(app::App);
}
