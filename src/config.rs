use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverlayConfig {
    /// Color de acento inicial (antes de cualquier setTheme del host)
    pub default_accent: String,
    /// Nombre del recurso si el host no expone GetParentResourceName()
    pub resource_name_fallback: String,
    pub enable_logging: bool,
    pub log_level: String,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            default_accent: "#e63946".to_string(),
            resource_name_fallback: "vehicle-delivery".to_string(),
            enable_logging: true,
            log_level: "info".to_string(),
        }
    }
}

impl OverlayConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            default_accent: option_env!("NUI_DEFAULT_ACCENT")
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .unwrap_or(defaults.default_accent),
            resource_name_fallback: option_env!("NUI_RESOURCE_NAME")
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .unwrap_or(defaults.resource_name_fallback),
            enable_logging: option_env!("NUI_ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            log_level: option_env!("NUI_LOG_LEVEL")
                .unwrap_or("info").to_string(),
        }
    }

    /// Nivel de log efectivo (Off si el logging está deshabilitado)
    pub fn log_level(&self) -> log::Level {
        match self.log_level.to_ascii_lowercase().as_str() {
            "error" => log::Level::Error,
            "warn" => log::Level::Warn,
            "debug" => log::Level::Debug,
            "trace" => log::Level::Trace,
            _ => log::Level::Info,
        }
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: OverlayConfig = OverlayConfig::from_env();
}
