// ============================================================================
// VEHICLE LIST VIEWMODEL - Proyección pura estado -> filas
// ============================================================================
// No toca el DOM. El adaptador de views/ consume las RowView tal cual.
// ============================================================================

use crate::models::command::OutboundCommand;
use crate::models::vehicle::VehicleRecord;
use crate::state::session_state::SessionState;
use crate::utils::{
    format_seconds, EMPTY_LIST_SUBTITLE, EMPTY_LIST_TITLE, PLATE_PREFIX, STATUS_PARKED,
    STATUS_READY, STATUS_UNPARKED,
};
use crate::viewmodels::availability::can_call;
use crate::viewmodels::filter::filter_vehicles;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParkStatus {
    Parked,
    Unparked,
}

impl ParkStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ParkStatus::Parked => STATUS_PARKED,
            ParkStatus::Unparked => STATUS_UNPARKED,
        }
    }

    /// Clase CSS del badge
    pub fn badge_class(&self) -> &'static str {
        match self {
            ParkStatus::Parked => "ok",
            ParkStatus::Unparked => "out",
        }
    }
}

/// Fila de un vehículo
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VehicleRow {
    pub title: String,
    pub subtitle: String,
    pub status: ParkStatus,
    pub action_enabled: bool,
    // Matrícula capturada al construir la fila
    action: OutboundCommand,
}

impl VehicleRow {
    fn from_vehicle(vehicle: &VehicleRecord, global_ok: bool) -> Self {
        let plate = vehicle.plate_upper();
        Self {
            title: vehicle.display_model().to_string(),
            subtitle: format!("{}{}", PLATE_PREFIX, plate),
            status: if vehicle.is_parked() { ParkStatus::Parked } else { ParkStatus::Unparked },
            action_enabled: can_call(vehicle, global_ok),
            action: OutboundCommand::RequestDelivery { plate },
        }
    }

    pub fn status_label(&self) -> &'static str {
        self.status.label()
    }

    /// Comando a emitir al pulsar "Call"; None si la acción está deshabilitada
    pub fn on_action(&self) -> Option<OutboundCommand> {
        if self.action_enabled {
            Some(self.action.clone())
        } else {
            None
        }
    }
}

/// Fila renderizable: vehículo real o placeholder sin acción
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowView {
    Vehicle(VehicleRow),
    Placeholder { title: String, subtitle: String },
}

impl RowView {
    pub fn title(&self) -> &str {
        match self {
            RowView::Vehicle(row) => &row.title,
            RowView::Placeholder { title, .. } => title,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, RowView::Placeholder { .. })
    }
}

/// Construir las filas a partir del estado actual
pub fn render_rows(state: &SessionState) -> Vec<RowView> {
    let filtered = filter_vehicles(&state.vehicles, &state.search_query);

    if filtered.is_empty() {
        return vec![RowView::Placeholder {
            title: EMPTY_LIST_TITLE.to_string(),
            subtitle: EMPTY_LIST_SUBTITLE.to_string(),
        }];
    }

    filtered
        .into_iter()
        .map(|vehicle| RowView::Vehicle(VehicleRow::from_vehicle(vehicle, state.call_enabled)))
        .collect()
}

/// Texto de estado: "Ready" o "Cooldown: Ns"
pub fn status_text(state: &SessionState) -> String {
    if state.call_enabled {
        STATUS_READY.to_string()
    } else {
        format!("Cooldown: {}s", format_seconds(state.cooldown_seconds))
    }
}
