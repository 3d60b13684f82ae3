// ============================================================================
// JS VALUE - Coerción de valores del host con la semántica de JavaScript
// ============================================================================
// Los payloads del host llegan sin tipos garantizados. Estas funciones nunca
// fallan: cualquier valor inesperado degrada a un default seguro.
// ============================================================================

use serde_json::Value;

/// Truthiness de JS (`!!value`)
pub fn js_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(false),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// `Number(value)`: NaN cuando no hay conversión posible
pub fn js_number(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(true) => 1.0,
        Value::Bool(false) => 0.0,
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse::<f64>().unwrap_or(f64::NAN)
            }
        }
        Value::Array(_) | Value::Object(_) => f64::NAN,
    }
}

/// `String(value)`: arrays con join(","), objetos como "[object Object]"
pub fn js_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
            Some(f) => f.to_string(),
            None => n.to_string(),
        },
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                // join() deja vacíos los null
                Value::Null => String::new(),
                other => js_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// `String(value || '')` para campos de texto del host
pub fn js_text(value: Option<&Value>) -> String {
    match value {
        Some(v) if js_truthy(v) => js_string(v),
        _ => String::new(),
    }
}

/// Número finito y no negativo; cualquier otra cosa es 0
pub fn non_negative_number(value: Option<&Value>) -> f64 {
    let n = value.map(js_number).unwrap_or(0.0);
    if n.is_finite() && n > 0.0 {
        n
    } else {
        0.0
    }
}

/// Formatear segundos como lo haría JS (sin ".0" para enteros)
pub fn format_seconds(seconds: f64) -> String {
    if seconds.fract() == 0.0 && seconds.abs() < 1e15 {
        format!("{}", seconds as i64)
    } else {
        seconds.to_string()
    }
}
