//! Pure helpers for extracting typed parameters from a `serde_json::Value`.
//!
//! Registries and `from_json` constructors use these to read optional keys
//! out of a params object. Missing keys or wrong types fall back to the
//! supplied default — parameter reading never fails, matching the
//! permissive policy of the generators themselves.

use serde_json::Value;

/// Extracts an `f64` from `params[name]`, or `default` if missing or mistyped.
///
/// JSON integers are accepted and widened to f64.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params.get(name).and_then(Value::as_f64).unwrap_or(default)
}

/// Extracts an `f64` clamped into `[min, max]`.
///
/// Out-of-range values are pulled to the nearest bound rather than rejected,
/// so a caller-supplied probability or rule number is always usable.
pub fn param_f64_clamped(params: &Value, name: &str, default: f64, min: f64, max: f64) -> f64 {
    param_f64(params, name, default).clamp(min, max)
}

/// Extracts a `u64` from `params[name]`, or `default` if missing, negative,
/// or mistyped.
pub fn param_u64(params: &Value, name: &str, default: u64) -> u64 {
    params.get(name).and_then(Value::as_u64).unwrap_or(default)
}

/// Extracts a `usize` from `params[name]`, or `default` if missing, negative,
/// or mistyped.
pub fn param_usize(params: &Value, name: &str, default: usize) -> usize {
    params
        .get(name)
        .and_then(Value::as_u64)
        .map(|v| v as usize)
        .unwrap_or(default)
}

/// Extracts a `bool` from `params[name]`, or `default` if missing or mistyped.
pub fn param_bool(params: &Value, name: &str, default: bool) -> bool {
    params.get(name).and_then(Value::as_bool).unwrap_or(default)
}

/// Extracts a `String` from `params[name]`, or `default` if missing or mistyped.
pub fn param_string(params: &Value, name: &str, default: &str) -> String {
    params
        .get(name)
        .and_then(Value::as_str)
        .map(String::from)
        .unwrap_or_else(|| default.to_owned())
}
