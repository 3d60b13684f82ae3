// ============================================================================
// STATE MODULE - Estado del overlay + efectos
// ============================================================================

pub mod effect;
pub mod session_state;

pub use effect::*;
pub use session_state::*;
