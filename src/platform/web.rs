//! Browser bindings: canvas lookup, clock, seeding

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, Window};

use crate::error::StartupError;

pub fn window() -> Result<Window, StartupError> {
    web_sys::window().ok_or(StartupError::NoWindow)
}

pub fn document() -> Result<Document, StartupError> {
    window()?.document().ok_or(StartupError::NoDocument)
}

/// Look up the `<canvas>` with the given id
pub fn find_canvas(id: &str) -> Result<HtmlCanvasElement, StartupError> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| StartupError::MissingCanvas(id.to_string()))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| StartupError::NotACanvas(id.to_string()))
}

/// Seed derived from the wall clock
pub fn clock_seed() -> u64 {
    js_sys::Date::now() as u64
}

/// Whether the browser should skip its default action for this key
///
/// Arrow keys would otherwise scroll the page while the player steers.
pub fn is_game_key(key: &str) -> bool {
    matches!(key, crate::sim::keys::ARROW_UP | crate::sim::keys::ARROW_DOWN)
}
