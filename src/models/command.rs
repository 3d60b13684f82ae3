use serde_json::{json, Value};

/// Acción saliente hacia el host (fire-and-forget, sin respuesta)
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum OutboundCommand {
    RequestDelivery { plate: String },
    Close,
}

impl OutboundCommand {
    /// Nombre del endpoint NUI
    pub fn action_name(&self) -> &'static str {
        match self {
            OutboundCommand::RequestDelivery { .. } => "requestDelivery",
            OutboundCommand::Close => "close",
        }
    }

    /// Cuerpo JSON de la petición
    pub fn body(&self) -> Value {
        match self {
            OutboundCommand::RequestDelivery { plate } => json!({ "plate": plate }),
            OutboundCommand::Close => json!({}),
        }
    }
}
