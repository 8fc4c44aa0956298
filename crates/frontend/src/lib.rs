//! Pet Manager - Yew WASM Frontend
//!
//! Browser-based administrative interface for the Pet Manager shop:
//! login, user management and sales-register screens. All record
//! state lives in the page session; there is no backend data API.

mod app;
mod components;
mod pages;
mod state;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() {
    yew::Renderer::<App>::new().render();
}
