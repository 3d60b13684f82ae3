// ============================================================================
// FILTER - Búsqueda por texto libre sobre la flota
// ============================================================================

use crate::models::vehicle::VehicleRecord;

/// El vehículo coincide si el modelo o la matrícula contienen la búsqueda
/// (sin distinguir mayúsculas). Búsqueda vacía = todo coincide.
pub fn matches(vehicle: &VehicleRecord, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    vehicle.model.to_lowercase().contains(&query) || vehicle.plate.to_lowercase().contains(&query)
}

/// Filtro estable: conserva el orden original
pub fn filter_vehicles<'a>(vehicles: &'a [VehicleRecord], query: &str) -> Vec<&'a VehicleRecord> {
    vehicles.iter().filter(|v| matches(v, query)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vehicle(model: &str, plate: &str) -> VehicleRecord {
        VehicleRecord {
            model: model.to_string(),
            plate: plate.to_string(),
            parked_raw: None,
        }
    }

    fn fleet() -> Vec<VehicleRecord> {
        vec![
            vehicle("Sultan", "abc123"),
            vehicle("Banshee", "XYZ999"),
            vehicle("Sultan RS", "qwe456"),
            vehicle("", "ABC777"),
        ]
    }

    #[test]
    fn test_empty_query_is_identity() {
        let list = fleet();
        let all: Vec<&VehicleRecord> = list.iter().collect();
        assert_eq!(filter_vehicles(&list, ""), all);
        assert_eq!(filter_vehicles(&list, "   "), all);
    }

    #[test]
    fn test_matches_model_or_plate_case_insensitive() {
        let list = fleet();
        let by_model: Vec<&str> = filter_vehicles(&list, "SULTAN").into_iter().map(|v| v.plate.as_str()).collect();
        assert_eq!(by_model, vec!["abc123", "qwe456"]);

        let by_plate: Vec<&str> = filter_vehicles(&list, "abc").into_iter().map(|v| v.plate.as_str()).collect();
        assert_eq!(by_plate, vec!["abc123", "ABC777"]);
    }

    #[test]
    fn test_query_is_trimmed() {
        let v = vehicle("Banshee", "XYZ999");
        assert!(matches(&v, "  xyz "));
    }

    #[test]
    fn test_result_is_subset_and_iff() {
        let list = fleet();
        for query in ["a", "an", "99", "zzz", "rs", "7"] {
            let result = filter_vehicles(&list, query);
            assert!(result.iter().all(|v| list.contains(*v)));
            let q = query.to_lowercase();
            for v in &list {
                let expected = v.model.to_lowercase().contains(&q) || v.plate.to_lowercase().contains(&q);
                assert_eq!(result.contains(&v), expected, "query {:?} vehicle {:?}", query, v);
            }
        }
    }

    #[test]
    fn test_no_match() {
        assert!(filter_vehicles(&fleet(), "zzz").is_empty());
    }
}
