// ============================================================================
// EVENT HANDLING - Registro de listeners
// ============================================================================
// - Listeners en elementos de la lista: cuando el elemento se destruye (al
//   limpiar #list) el navegador libera los listeners, closure.forget() es seguro.
// - Listeners globales (window/document): se registran UNA sola vez en el
//   arranque, ver App::bind_events.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, KeyboardEvent, MessageEvent, MouseEvent};

fn listen<E, F>(target: &EventTarget, event_type: &str, handler: F) -> Result<(), JsValue>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    // Nota: closure.forget() es necesario para mantener el closure vivo en Rust WASM
    closure.forget();
    Ok(())
}

/// Click handler simple
pub fn on_click<F>(target: &EventTarget, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    listen(target, "click", handler)
}

/// Input handler (cada tecla en un <input>)
pub fn on_input<F>(target: &EventTarget, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    listen(target, "input", handler)
}

/// Keydown handler
pub fn on_keydown<F>(target: &EventTarget, handler: F) -> Result<(), JsValue>
where
    F: FnMut(KeyboardEvent) + 'static,
{
    listen(target, "keydown", handler)
}

/// Mensajes postMessage (canal del host)
pub fn on_message<F>(target: &EventTarget, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MessageEvent) + 'static,
{
    listen(target, "message", handler)
}
