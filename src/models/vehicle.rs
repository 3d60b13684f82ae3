use serde_json::Value;
use crate::utils::{js_number, js_text};

/// Vehículo entregable tal como lo conoce el overlay
#[derive(Clone, PartialEq, Debug, Default)]
pub struct VehicleRecord {
    pub model: String,
    pub plate: String,
    // None = el host no envía la columna (se trata como aparcado)
    pub parked_raw: Option<f64>,
}

impl VehicleRecord {
    /// Normalizar un registro crudo del host. Nunca falla.
    pub fn normalize(raw: &Value) -> Self {
        let parked_raw = match raw.get("parked") {
            None | Some(Value::Null) => None,
            Some(flag) => Some(js_number(flag)),
        };

        Self {
            model: js_text(raw.get("model")),
            plate: js_text(raw.get("plate")),
            parked_raw,
        }
    }

    /// Normalizar la flota completa; un payload que no es array es una flota vacía
    pub fn normalize_fleet(raw: Option<&Value>) -> Vec<Self> {
        match raw {
            Some(Value::Array(items)) => items.iter().map(Self::normalize).collect(),
            _ => Vec::new(),
        }
    }

    /// Sin flag = aparcado; con flag solo un 1 exacto
    pub fn is_parked(&self) -> bool {
        match self.parked_raw {
            None => true,
            Some(flag) => flag == 1.0,
        }
    }

    /// Matrícula para mostrar y para la petición de entrega
    pub fn plate_upper(&self) -> String {
        self.plate.to_uppercase()
    }

    pub fn display_model(&self) -> &str {
        if self.model.is_empty() {
            crate::utils::UNKNOWN_MODEL
        } else {
            &self.model
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_parked_flag_means_parked() {
        let v = VehicleRecord::normalize(&json!({"model": "Sultan", "plate": "abc123"}));
        assert!(v.is_parked());
        let v = VehicleRecord::normalize(&json!({"plate": "abc123", "parked": null}));
        assert!(v.is_parked());
    }

    #[test]
    fn test_parked_flag_values() {
        assert!(VehicleRecord::normalize(&json!({"parked": 1})).is_parked());
        assert!(VehicleRecord::normalize(&json!({"parked": "1"})).is_parked());
        assert!(VehicleRecord::normalize(&json!({"parked": true})).is_parked());
        assert!(!VehicleRecord::normalize(&json!({"parked": 0})).is_parked());
        assert!(!VehicleRecord::normalize(&json!({"parked": 2})).is_parked());
        assert!(!VehicleRecord::normalize(&json!({"parked": "yes"})).is_parked());
    }

    #[test]
    fn test_malformed_record_degrades() {
        let v = VehicleRecord::normalize(&json!("not a record"));
        assert_eq!(v.model, "");
        assert_eq!(v.plate, "");
        assert!(v.is_parked());
        assert_eq!(v.display_model(), "Unknown");
    }

    #[test]
    fn test_non_string_fields_follow_js_string() {
        let v = VehicleRecord::normalize(&json!({"model": ["Sultan"], "plate": {"x": 1}}));
        assert_eq!(v.model, "Sultan");
        assert_eq!(v.plate, "[object Object]");

        let v = VehicleRecord::normalize(&json!({"model": 0, "plate": 4521}));
        assert_eq!(v.display_model(), "Unknown");
        assert_eq!(v.plate, "4521");
    }

    #[test]
    fn test_normalize_fleet_non_array_is_empty() {
        assert!(VehicleRecord::normalize_fleet(Some(&json!({"plate": "x"}))).is_empty());
        assert!(VehicleRecord::normalize_fleet(Some(&json!(null))).is_empty());
        assert!(VehicleRecord::normalize_fleet(None).is_empty());

        let fleet = VehicleRecord::normalize_fleet(Some(&json!([{"plate": "a"}, 5, {"plate": "b"}])));
        assert_eq!(fleet.len(), 3);
        assert_eq!(fleet[2].plate, "b");
    }

    #[test]
    fn test_plate_upper() {
        let v = VehicleRecord::normalize(&json!({"plate": "abc123"}));
        assert_eq!(v.plate_upper(), "ABC123");
        assert_eq!(v.plate, "abc123");
    }
}
