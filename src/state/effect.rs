// ============================================================================
// EFFECTS - Lo que el estado pide al runner después de cada evento
// ============================================================================

use crate::models::command::OutboundCommand;

/// Parte del DOM que hay que actualizar
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IncrementalUpdate {
    /// Mostrar/ocultar el contenedor
    Visibility,
    /// Reescribir la variable CSS de acento
    Theme,
    /// Texto "Ready" / "Cooldown: Ns"
    CooldownStatus,
    /// Re-render completo de la lista de vehículos
    VehicleList,
}

/// Efecto devuelto por los handlers de SessionState
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    Update(IncrementalUpdate),
    /// Notificación saliente al host (fire-and-forget)
    Emit(OutboundCommand),
}
