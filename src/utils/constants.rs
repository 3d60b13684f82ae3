// Textos y clases fijas del overlay

/// Título cuando el vehículo no trae modelo
pub const UNKNOWN_MODEL: &str = "Unknown";

/// Prefijo del subtítulo de cada fila (seguido de la matrícula en mayúsculas)
pub const PLATE_PREFIX: &str = "PLATE • ";

pub const STATUS_PARKED: &str = "Parked";
pub const STATUS_UNPARKED: &str = "Unparked";

pub const STATUS_READY: &str = "Ready";

pub const EMPTY_LIST_TITLE: &str = "No vehicles";
pub const EMPTY_LIST_SUBTITLE: &str = "Nothing matched your search.";

pub const CALL_BUTTON_LABEL: &str = "Call";

/// Tecla que cierra el overlay
pub const CLOSE_KEY: &str = "Escape";

/// Clase CSS que oculta el contenedor principal
pub const HIDDEN_CLASS: &str = "hidden";

/// Variable CSS donde se escribe el color de acento
pub const ACCENT_CSS_VAR: &str = "--accent";
