//! Lenient conversion of loose JSON values into numbers and color components.
//!
//! Every helper here takes a `serde_json::Value` and always produces a usable
//! value: missing, mistyped, or non-finite input falls back to a default and
//! out-of-range numbers saturate at the nearest bound. Nothing in this module
//! fails, which is what lets the color constructors accept raw pointer or text
//! input without ever returning an error.

use serde_json::Value;

/// Converts a loose value to a finite number.
///
/// JSON numbers are taken as-is, strings are trimmed and parsed, booleans map
/// to 1 and 0. `null`, arrays, objects, unparseable strings, and non-finite
/// results all yield `None`.
pub fn as_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    };
    n.filter(|n| n.is_finite())
}

/// Clamps a number into `[min, max]`, substituting `default` for non-finite input.
pub fn clamp_or(value: f64, min: f64, max: f64, default: f64) -> f64 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        default
    }
}

/// Wraps a hue in degrees into `[0, 360)`, substituting 0 for non-finite input.
///
/// Uses floored modulo so negative hues wrap from the top: -1 becomes 359 and
/// 1000 becomes 280. A tiny negative hue can round up to exactly 360 and is
/// folded back to 0.
pub fn wrap_hue(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let h = value - 360.0 * (value / 360.0).floor();
    if h >= 360.0 {
        0.0
    } else {
        h
    }
}

/// Normalizes a loose value into `[min, max]`, falling back to `default`.
pub fn normalize_bounded(value: &Value, min: f64, max: f64, default: f64) -> f64 {
    as_number(value).map_or(default, |n| clamp_or(n, min, max, default))
}

/// Normalizes a loose value into a hue in `[0, 360)`, falling back to 0.
pub fn normalize_hue(value: &Value) -> f64 {
    as_number(value).map_or(0.0, wrap_hue)
}

/// Extracts an `f64` from `params[name]`, returning `default` if missing or wrong type.
///
/// Numeric strings are accepted, matching [`as_number`].
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params.get(name).and_then(as_number).unwrap_or(default)
}

/// Extracts a `String` from `params[name]`, returning `default` if missing or wrong type.
pub fn param_string(params: &Value, name: &str, default: &str) -> String {
    params
        .get(name)
        .and_then(Value::as_str)
        .map(String::from)
        .unwrap_or_else(|| default.to_owned())
}
