// ============================================================================
// NUI CLIENT - SOLO COMUNICACIÓN CON EL HOST (Stateless)
// ============================================================================
// POST https://{resource}/{action} con cuerpo JSON. Fire-and-forget: no se
// espera respuesta, no hay reintentos. Los fallos solo se registran en log.
// ============================================================================

use gloo_net::http::Request;
use wasm_bindgen::prelude::*;
use crate::config::CONFIG;
use crate::models::command::OutboundCommand;

const CONTENT_TYPE: &str = "application/json; charset=UTF-8";

#[wasm_bindgen]
extern "C" {
    // Global que inyecta el host en la página del overlay
    #[wasm_bindgen(js_name = GetParentResourceName, catch)]
    fn get_parent_resource_name() -> Result<String, JsValue>;
}

/// Canal saliente hacia el host
pub trait HostTransport {
    fn send(&self, command: &OutboundCommand);
}

/// Transporte NUI sobre fetch
#[derive(Clone)]
pub struct NuiClient {
    resource_name: String,
}

impl NuiClient {
    pub fn new() -> Self {
        let resource_name = match get_parent_resource_name() {
            Ok(name) if !name.is_empty() => name,
            _ => {
                log::warn!(
                    "⚠️ [NUI] GetParentResourceName() no disponible, usando '{}'",
                    CONFIG.resource_name_fallback
                );
                CONFIG.resource_name_fallback.clone()
            }
        };
        Self::with_resource_name(resource_name)
    }

    pub fn with_resource_name(resource_name: String) -> Self {
        Self { resource_name }
    }

    pub fn endpoint(&self, command: &OutboundCommand) -> String {
        format!("https://{}/{}", self.resource_name, command.action_name())
    }

    /// Enviar un comando y esperar solo a que el POST salga
    pub async fn post(&self, command: &OutboundCommand) -> Result<(), String> {
        let url = self.endpoint(command);
        let body = serde_json::to_string(&command.body())
            .map_err(|e| format!("Serialization error: {}", e))?;

        let response = Request::post(&url)
            .header("Content-Type", CONTENT_TYPE)
            .body(body)
            .map_err(|e| format!("Request error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }
        Ok(())
    }
}

impl Default for NuiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HostTransport for NuiClient {
    fn send(&self, command: &OutboundCommand) {
        log::info!("📤 [NUI] {} {}", command.action_name(), command.body());
        let client = self.clone();
        let command = command.clone();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = client.post(&command).await {
                log::warn!("⚠️ [NUI] {} no entregado: {}", command.action_name(), e);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_per_action() {
        let client = NuiClient::with_resource_name("qb-valet".to_string());
        assert_eq!(client.endpoint(&OutboundCommand::Close), "https://qb-valet/close");
        assert_eq!(
            client.endpoint(&OutboundCommand::RequestDelivery { plate: "ABC123".to_string() }),
            "https://qb-valet/requestDelivery"
        );
    }
}
