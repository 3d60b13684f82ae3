// ============================================================================
// OVERLAY VIEW - Contenedor, tema y texto de estado
// ============================================================================
// Ninguno de estos cambios recalcula filas.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{add_class, remove_class, set_root_style_property, set_text_content};
use crate::utils::{ACCENT_CSS_VAR, HIDDEN_CLASS};

pub fn apply_visibility(container: &Element, visible: bool) -> Result<(), JsValue> {
    if visible {
        remove_class(container, HIDDEN_CLASS)
    } else {
        add_class(container, HIDDEN_CLASS)
    }
}

pub fn apply_accent(accent: &str) -> Result<(), JsValue> {
    set_root_style_property(ACCENT_CSS_VAR, accent)
}

pub fn render_status(status_el: &Element, text: &str) {
    set_text_content(status_el, text);
}
