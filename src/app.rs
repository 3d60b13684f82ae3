// ============================================================================
// APP - Runner del overlay: estado + handles del DOM + transporte
// ============================================================================
// SessionState decide QUÉ cambia (devuelve efectos); App los aplica al DOM o
// los entrega al transporte. Todo corre en el hilo del navegador.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use std::rc::Rc;
use crate::dom::{
    document, get_element_by_id, input_value, on_click, on_input, on_keydown, on_message,
    require_element, window,
};
use crate::services::{HostTransport, NuiClient};
use crate::state::{Effect, IncrementalUpdate, SessionState};
use crate::viewmodels::vehicle_list::{render_rows, status_text, VehicleRow};
use crate::views::{apply_accent, apply_visibility, render_status, render_vehicle_list};

// IDs del documento del overlay
const CONTAINER_ID: &str = "app";
const LIST_ID: &str = "list";
const SEARCH_ID: &str = "search";
const STATUS_ID: &str = "cooldown";
const CLOSE_BUTTON_IDS: [&str; 2] = ["close", "btnClose"];

/// Repartir efectos en orden: los Update van al callback del DOM, cada Emit
/// se entrega una sola vez al transporte. Se corta en el primer error del DOM.
pub fn route_effects<E, U>(
    effects: Vec<Effect>,
    transport: &dyn HostTransport,
    mut apply_update: U,
) -> Result<(), E>
where
    U: FnMut(IncrementalUpdate) -> Result<(), E>,
{
    for effect in effects {
        match effect {
            Effect::Update(update) => apply_update(update)?,
            Effect::Emit(command) => transport.send(&command),
        }
    }
    Ok(())
}

/// Aplicación principal
pub struct App {
    state: SessionState,
    transport: Box<dyn HostTransport>,
    container: Element,
    list: Element,
    status: Option<Element>,
}

impl App {
    /// Crear nueva aplicación con el transporte NUI
    pub fn new() -> Result<Self, JsValue> {
        Self::with_transport(Box::new(NuiClient::new()))
    }

    pub fn with_transport(transport: Box<dyn HostTransport>) -> Result<Self, JsValue> {
        let container = require_element(CONTAINER_ID)?;
        let list = require_element(LIST_ID)?;
        let status = get_element_by_id(STATUS_ID);
        if status.is_none() {
            log::warn!("⚠️ [APP] No hay #{}, el estado de cooldown no se mostrará", STATUS_ID);
        }

        Ok(Self {
            state: SessionState::new(),
            transport,
            container,
            list,
            status,
        })
    }

    /// Pintar todo desde cero (arranque)
    pub fn render(&self) -> Result<(), JsValue> {
        self.update_incremental(IncrementalUpdate::Visibility)?;
        self.update_incremental(IncrementalUpdate::Theme)?;
        self.update_incremental(IncrementalUpdate::CooldownStatus)?;
        self.update_incremental(IncrementalUpdate::VehicleList)
    }

    /// Ejecutar un handler del estado y aplicar sus efectos
    pub fn handle<F>(&mut self, handler: F) -> Result<(), JsValue>
    where
        F: FnOnce(&mut SessionState) -> Vec<Effect>,
    {
        let effects = handler(&mut self.state);
        self.run_effects(effects)
    }

    fn run_effects(&self, effects: Vec<Effect>) -> Result<(), JsValue> {
        route_effects(effects, self.transport.as_ref(), |update| {
            self.update_incremental(update)
        })
    }

    /// Actualización incremental del DOM (solo la parte afectada)
    pub fn update_incremental(&self, update: IncrementalUpdate) -> Result<(), JsValue> {
        match update {
            IncrementalUpdate::Visibility => apply_visibility(&self.container, self.state.visible),
            IncrementalUpdate::Theme => apply_accent(&self.state.accent_color),
            IncrementalUpdate::CooldownStatus => {
                if let Some(status) = &self.status {
                    render_status(status, &status_text(&self.state));
                }
                Ok(())
            }
            IncrementalUpdate::VehicleList => {
                let rows = render_rows(&self.state);
                let on_action: Rc<dyn Fn(VehicleRow)> = Rc::new(|row: VehicleRow| {
                    crate::dispatch(move |state| state.request_delivery(&row));
                });
                render_vehicle_list(&self.list, &rows, on_action)
            }
        }
    }

    /// Registrar listeners globales. Llamar UNA sola vez en el arranque.
    pub fn bind_events(&self) -> Result<(), JsValue> {
        let win = window().ok_or_else(|| JsValue::from_str("No window"))?;
        on_message(&win, |e: web_sys::MessageEvent| {
            crate::handle_host_data(e.data());
        })?;

        let doc = document().ok_or_else(|| JsValue::from_str("No document"))?;
        on_keydown(&doc, |e: web_sys::KeyboardEvent| {
            let key = e.key();
            crate::dispatch(move |state| state.handle_key(&key));
        })?;

        match get_element_by_id(SEARCH_ID) {
            Some(search) => {
                let search_clone = search.clone();
                on_input(&search, move |_e: web_sys::Event| {
                    let text = input_value(&search_clone);
                    crate::dispatch(move |state| state.handle_search_input(&text));
                })?;
            }
            None => log::warn!("⚠️ [APP] No hay #{}, búsqueda deshabilitada", SEARCH_ID),
        }

        for id in CLOSE_BUTTON_IDS {
            if let Some(button) = get_element_by_id(id) {
                on_click(&button, |_e: web_sys::MouseEvent| {
                    crate::dispatch(|state| state.handle_close());
                })?;
            }
        }

        Ok(())
    }
}
