// ============================================================================
// AVAILABILITY - Cuándo se puede pedir la entrega de un vehículo
// ============================================================================
// Se recalcula en cada render: el flag global y el estado de aparcado
// cambian de forma independiente.
// ============================================================================

use crate::models::vehicle::VehicleRecord;

/// Permitido solo si el host lo autoriza globalmente y el vehículo está aparcado
pub fn can_call(vehicle: &VehicleRecord, global_ok: bool) -> bool {
    global_ok && vehicle.is_parked()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vehicle(parked: Option<f64>) -> VehicleRecord {
        VehicleRecord {
            model: "Sultan".to_string(),
            plate: "abc123".to_string(),
            parked_raw: parked,
        }
    }

    #[test]
    fn test_truth_table() {
        assert!(can_call(&vehicle(Some(1.0)), true));
        assert!(!can_call(&vehicle(Some(1.0)), false));
        assert!(!can_call(&vehicle(Some(0.0)), true));
        assert!(!can_call(&vehicle(Some(0.0)), false));
    }

    #[test]
    fn test_missing_flag_follows_global() {
        assert!(can_call(&vehicle(None), true));
        assert!(!can_call(&vehicle(None), false));
    }
}
