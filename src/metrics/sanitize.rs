use crate::Result;
use crate::snapshot::Value;
use ohno::bail;

/// Normalize a scalar value for serialization.
///
/// Booleans become 0/1 so they land as numeric time-series points. Strings
/// are stripped of `"` characters, which would otherwise break the JSONL
/// encoding downstream (e.g. `"tokenName" 0.1.0`). Null, integers, and floats
/// pass through unchanged.
///
/// A nested map is not a scalar; reaching one here means the caller failed to
/// flatten, which is surfaced as a data-integrity error rather than coerced.
pub fn sanitize(value: &Value) -> Result<Value> {
    match value {
        Value::Bool(b) => Ok(Value::Int(i64::from(*b))),
        Value::Str(s) => Ok(Value::Str(s.replace('"', ""))),
        Value::Null | Value::Int(_) | Value::Float(_) => Ok(value.clone()),
        Value::Map(_) => bail!("cannot use a nested map as a metric value"),
    }
}

/// The string path of [`sanitize`], applied to label names before they are
/// used as mapping keys. A no-op for the static schema names, but kept so
/// label keys and label values are cleaned by the same rule.
#[must_use]
pub fn sanitize_label_name(name: &str) -> String {
    name.replace('"', "")
}
