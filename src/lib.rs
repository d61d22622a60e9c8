/// Extension Panel - browser extension manager UI
/// Built with Rust + WASM + Yew

pub mod cards;
pub mod client;
pub mod extension_data;
pub mod ui;

use wasm_bindgen::prelude::*;

const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Start the panel against the default local backend
#[wasm_bindgen]
pub fn start_panel() {
    start_panel_at(DEFAULT_API_BASE);
}

// Start the panel against a specific backend base URL
#[wasm_bindgen]
pub fn start_panel_at(api_base: &str) {
    yew::Renderer::<ui::panel::Panel>::with_props(ui::panel::PanelProps {
        api_base: api_base.to_string(),
    })
    .render();
}
