// ============================================================================
// SESSION STATE - Estado del overlay y protocolo de mensajes
// ============================================================================
// Una instancia por sesión del overlay. Solo se modifica desde los handlers
// de abajo, que devuelven los efectos a aplicar en vez de tocar el DOM o la
// red directamente.
// ============================================================================

use crate::config::CONFIG;
use crate::models::command::OutboundCommand;
use crate::models::message::HostMessage;
use crate::models::vehicle::VehicleRecord;
use crate::state::effect::{Effect, IncrementalUpdate};
use crate::utils::CLOSE_KEY;
use crate::viewmodels::vehicle_list::VehicleRow;

#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub visible: bool,
    pub accent_color: String,
    pub call_enabled: bool,
    pub cooldown_seconds: f64,
    pub vehicles: Vec<VehicleRecord>,
    pub search_query: String,
}

impl SessionState {
    /// Crear nuevo estado con el acento por defecto de la configuración
    pub fn new() -> Self {
        Self::with_accent(&CONFIG.default_accent)
    }

    pub fn with_accent(accent: &str) -> Self {
        Self {
            visible: false,
            accent_color: accent.to_string(),
            call_enabled: true,
            cooldown_seconds: 0.0,
            vehicles: Vec::new(),
            search_query: String::new(),
        }
    }

    /// Aplicar un mensaje del host
    pub fn apply_message(&mut self, msg: HostMessage) -> Vec<Effect> {
        match msg {
            HostMessage::SetVisible { visible } => {
                self.visible = visible;
                vec![Effect::Update(IncrementalUpdate::Visibility)]
            }
            HostMessage::SetTheme { accent } => {
                // El acento nunca queda vacío
                if let Some(accent) = accent.filter(|a| !a.is_empty()) {
                    self.accent_color = accent;
                }
                vec![Effect::Update(IncrementalUpdate::Theme)]
            }
            HostMessage::SetData { ok, cooldown, vehicles } => {
                self.call_enabled = ok;
                self.cooldown_seconds =
                    if cooldown.is_finite() && cooldown > 0.0 { cooldown } else { 0.0 };
                self.vehicles = vehicles;
                log::debug!(
                    "📦 [STATE] setData: {} vehículos, ok={}, cooldown={}",
                    self.vehicles.len(),
                    self.call_enabled,
                    self.cooldown_seconds
                );
                vec![
                    Effect::Update(IncrementalUpdate::CooldownStatus),
                    Effect::Update(IncrementalUpdate::VehicleList),
                ]
            }
            HostMessage::Unknown { kind } => {
                log::debug!("❔ [STATE] Mensaje ignorado (type={:?})", kind);
                Vec::new()
            }
        }
    }

    /// Texto del buscador (se guarda sin espacios en los extremos)
    pub fn handle_search_input(&mut self, text: &str) -> Vec<Effect> {
        self.search_query = text.trim().to_string();
        vec![Effect::Update(IncrementalUpdate::VehicleList)]
    }

    /// Botones de cierre; no depende de la visibilidad actual
    pub fn handle_close(&self) -> Vec<Effect> {
        vec![Effect::Emit(OutboundCommand::Close)]
    }

    /// Teclado global: Escape es otra entrada a la misma acción de cierre
    pub fn handle_key(&self, key: &str) -> Vec<Effect> {
        if key == CLOSE_KEY {
            self.handle_close()
        } else {
            Vec::new()
        }
    }

    /// Click en "Call" de una fila ya renderizada
    pub fn request_delivery(&self, row: &VehicleRow) -> Vec<Effect> {
        row.on_action().map(Effect::Emit).into_iter().collect()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn set_data(ok: bool, vehicles: serde_json::Value) -> HostMessage {
        HostMessage::from_value(&json!({
            "type": "setData",
            "ok": ok,
            "cooldown": 0,
            "vehicles": vehicles,
        }))
    }

    #[test]
    fn test_set_visible_only_touches_container() {
        let mut state = SessionState::with_accent("#e63946");
        let effects = state.apply_message(HostMessage::SetVisible { visible: true });
        assert!(state.visible);
        assert_eq!(effects, vec![Effect::Update(IncrementalUpdate::Visibility)]);

        state.apply_message(HostMessage::SetVisible { visible: false });
        assert!(!state.visible);
    }

    #[test]
    fn test_set_theme_accent_rules() {
        let mut state = SessionState::with_accent("#e63946");
        state.apply_message(HostMessage::from_value(&json!({"type": "setTheme", "accent": ""})));
        assert_eq!(state.accent_color, "#e63946");

        state.apply_message(HostMessage::from_value(&json!({"type": "setTheme", "accent": "#3a86ff"})));
        assert_eq!(state.accent_color, "#3a86ff");

        state.apply_message(HostMessage::from_value(&json!({"type": "setTheme"})));
        assert_eq!(state.accent_color, "#3a86ff");
    }

    #[test]
    fn test_set_data_replaces_everything() {
        let mut state = SessionState::with_accent("#e63946");
        state.apply_message(set_data(true, json!([{"plate": "a"}, {"plate": "b"}])));
        assert_eq!(state.vehicles.len(), 2);

        let effects = state.apply_message(HostMessage::from_value(&json!({
            "type": "setData",
            "ok": false,
            "cooldown": 45,
            "vehicles": [{"plate": "c"}]
        })));
        assert!(!state.call_enabled);
        assert_eq!(state.cooldown_seconds, 45.0);
        assert_eq!(state.vehicles.len(), 1);
        assert_eq!(state.vehicles[0].plate, "c");
        assert_eq!(
            effects,
            vec![
                Effect::Update(IncrementalUpdate::CooldownStatus),
                Effect::Update(IncrementalUpdate::VehicleList),
            ]
        );
    }

    #[test]
    fn test_cooldown_never_negative() {
        let mut state = SessionState::with_accent("#e63946");
        state.apply_message(HostMessage::SetData { ok: false, cooldown: -10.0, vehicles: Vec::new() });
        assert_eq!(state.cooldown_seconds, 0.0);
        state.apply_message(HostMessage::SetData { ok: false, cooldown: f64::NAN, vehicles: Vec::new() });
        assert_eq!(state.cooldown_seconds, 0.0);
    }

    #[test]
    fn test_unknown_message_is_ignored() {
        let mut state = SessionState::with_accent("#e63946");
        state.apply_message(set_data(true, json!([{"plate": "a"}])));
        let before = state.clone();
        let effects = state.apply_message(HostMessage::from_value(&json!({"type": "setSomething"})));
        assert!(effects.is_empty());
        assert_eq!(state, before);
    }

    #[test]
    fn test_search_input_is_trimmed_not_lowercased() {
        let mut state = SessionState::with_accent("#e63946");
        let effects = state.handle_search_input("  AbC  ");
        assert_eq!(state.search_query, "AbC");
        assert_eq!(effects, vec![Effect::Update(IncrementalUpdate::VehicleList)]);
    }

    #[test]
    fn test_escape_emits_single_close_regardless_of_visibility() {
        let mut state = SessionState::with_accent("#e63946");
        for visible in [false, true] {
            state.apply_message(HostMessage::SetVisible { visible });
            assert_eq!(state.handle_key("Escape"), vec![Effect::Emit(OutboundCommand::Close)]);
        }
        assert_eq!(state.handle_close(), state.handle_key("Escape"));
        assert!(state.handle_key("Enter").is_empty());
    }
}
