use serde_json::Value;
use crate::models::vehicle::VehicleRecord;
use crate::utils::{js_text, js_truthy, non_negative_number};

/// Mensaje entrante del host, discriminado por el campo `type`
#[derive(Clone, PartialEq, Debug)]
pub enum HostMessage {
    SetVisible {
        visible: bool,
    },
    SetTheme {
        /// None cuando el host manda un acento vacío o ausente
        accent: Option<String>,
    },
    SetData {
        ok: bool,
        cooldown: f64,
        vehicles: Vec<VehicleRecord>,
    },
    /// Tipo desconocido (o sin `type`): se ignora
    Unknown {
        kind: String,
    },
}

impl HostMessage {
    /// Construir el mensaje desde el `event.data` ya convertido a JSON.
    /// Total: nunca falla, los campos mal tipados se coercionan.
    pub fn from_value(data: &Value) -> Self {
        let kind = data.get("type").and_then(Value::as_str).unwrap_or_default();

        match kind {
            "setVisible" => HostMessage::SetVisible {
                visible: data.get("visible").map(js_truthy).unwrap_or(false),
            },
            "setTheme" => {
                let accent = js_text(data.get("accent"));
                HostMessage::SetTheme {
                    accent: if accent.is_empty() { None } else { Some(accent) },
                }
            }
            "setData" => HostMessage::SetData {
                ok: data.get("ok").map(js_truthy).unwrap_or(false),
                cooldown: non_negative_number(data.get("cooldown")),
                vehicles: VehicleRecord::normalize_fleet(data.get("vehicles")),
            },
            other => HostMessage::Unknown {
                kind: other.to_string(),
            },
        }
    }

    pub fn kind(&self) -> &str {
        match self {
            HostMessage::SetVisible { .. } => "setVisible",
            HostMessage::SetTheme { .. } => "setTheme",
            HostMessage::SetData { .. } => "setData",
            HostMessage::Unknown { kind } => kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_set_visible() {
        assert_eq!(
            HostMessage::from_value(&json!({"type": "setVisible", "visible": true})),
            HostMessage::SetVisible { visible: true }
        );
        assert_eq!(
            HostMessage::from_value(&json!({"type": "setVisible"})),
            HostMessage::SetVisible { visible: false }
        );
    }

    #[test]
    fn test_parse_set_theme_empty_accent() {
        assert_eq!(
            HostMessage::from_value(&json!({"type": "setTheme", "accent": ""})),
            HostMessage::SetTheme { accent: None }
        );
        assert_eq!(
            HostMessage::from_value(&json!({"type": "setTheme"})),
            HostMessage::SetTheme { accent: None }
        );
        assert_eq!(
            HostMessage::from_value(&json!({"type": "setTheme", "accent": "#00ff00"})),
            HostMessage::SetTheme { accent: Some("#00ff00".to_string()) }
        );
    }

    #[test]
    fn test_parse_set_data_coerces_fields() {
        let msg = HostMessage::from_value(&json!({
            "type": "setData",
            "ok": 1,
            "cooldown": "12",
            "vehicles": [{"model": "Sultan", "plate": "abc123", "parked": 1}]
        }));
        match msg {
            HostMessage::SetData { ok, cooldown, vehicles } => {
                assert!(ok);
                assert_eq!(cooldown, 12.0);
                assert_eq!(vehicles.len(), 1);
                assert_eq!(vehicles[0].model, "Sultan");
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[test]
    fn test_parse_set_data_malformed_payload() {
        let msg = HostMessage::from_value(&json!({
            "type": "setData",
            "cooldown": "later",
            "vehicles": "nope"
        }));
        assert_eq!(
            msg,
            HostMessage::SetData { ok: false, cooldown: 0.0, vehicles: Vec::new() }
        );
    }

    #[test]
    fn test_parse_unknown_kinds() {
        assert_eq!(
            HostMessage::from_value(&json!({"type": "setLocale", "locale": "fr"})),
            HostMessage::Unknown { kind: "setLocale".to_string() }
        );
        assert_eq!(
            HostMessage::from_value(&Value::Null),
            HostMessage::Unknown { kind: String::new() }
        );
        assert_eq!(
            HostMessage::from_value(&json!({"type": 3})).kind(),
            ""
        );
    }
}
