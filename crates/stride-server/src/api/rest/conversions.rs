//! Request value parsing
//!
//! The original web client posts some numeric fields as formatted strings
//! (e.g. a mm:ss time already flattened to seconds), so numeric request
//! fields accept either JSON numbers or numeric strings.

use serde_json::Value;

/// Parse a JSON number or numeric string as a performance value
pub(super) fn parse_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Parse a JSON number or numeric string as a whole point total.
///
/// Fractional inputs truncate toward zero; values beyond the `i32` range
/// saturate so the engine's own range check produces the error message.
pub(super) fn parse_points(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .map(clamp_to_i32),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().map(|f| f as i64))
                .map(clamp_to_i32)
        }
        _ => None,
    }
}

fn clamp_to_i32(value: i64) -> i32 {
    value.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}
