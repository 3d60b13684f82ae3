// ============================================================================
// VEHICLE DELIVERY OVERLAY - Rust + WASM
// ============================================================================
// - Models: registros del host, mensajes entrantes y comandos salientes
// - ViewModels: filtro, disponibilidad y proyección estado -> filas (puro)
// - State: SessionState + efectos (puro, testeable sin navegador)
// - Views/DOM: adaptador que pinta las filas
// - Services: transporte NUI hacia el host
// ============================================================================

mod app;
mod config;
mod dom;
mod models;
mod services;
mod state;
mod utils;
mod viewmodels;
mod views;

use wasm_bindgen::prelude::*;
use std::cell::RefCell;
use crate::app::App;
use crate::config::CONFIG;
use crate::models::HostMessage;
use crate::state::{Effect, SessionState};

// Instancia única de App para los callbacks del DOM
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    }
    log::info!("🚗 [MAIN] Vehicle delivery overlay");

    let app = App::new()?;
    app.render()?;
    app.bind_events()?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Ejecutar un handler sobre el estado de la App y aplicar sus efectos
pub(crate) fn dispatch<F>(handler: F)
where
    F: FnOnce(&mut SessionState) -> Vec<Effect>,
{
    APP.with(|app_cell| match app_cell.try_borrow_mut() {
        Ok(mut app) => match app.as_mut() {
            Some(app) => {
                if let Err(e) = app.handle(handler) {
                    log::error!("❌ [APP] Error aplicando efectos: {:?}", e);
                }
            }
            None => log::warn!("⚠️ [APP] App no está inicializada"),
        },
        Err(_) => log::warn!("⚠️ [APP] Evento recibido durante otro handler, ignorado"),
    });
}

/// `event.data` del host -> HostMessage -> estado
pub(crate) fn handle_host_data(data: JsValue) {
    let value: serde_json::Value =
        serde_wasm_bindgen::from_value(data).unwrap_or(serde_json::Value::Null);
    let msg = HostMessage::from_value(&value);
    log::debug!("📨 [PROTOCOL] {}", msg.kind());
    dispatch(move |state| state.apply_message(msg));
}

/// Entrada directa para shims del host que no usan postMessage
#[wasm_bindgen]
pub fn receive_host_message(data: JsValue) {
    handle_host_data(data);
}
