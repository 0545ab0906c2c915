use crate::snapshot::{FieldMap, Value};

/// Derive the ordered label values for one sample from an instance's field
/// map: the caller's leading labels, then the stringified `address` and
/// `version` fields, then (when requested) the experimental flag.
///
/// Missing optional fields never error; `address` and `version` degrade to
/// `"n/a"` and the experimental flag is `"true"` only for an exact boolean
/// true, `"false"` for anything else including absent.
#[must_use]
pub fn resolve_labels(fields: &FieldMap, leading: &[&str], include_experimental: bool) -> Vec<String> {
    let mut values: Vec<String> = leading.iter().map(|label| (*label).to_string()).collect();
    values.push(string_label(fields, "address"));
    values.push(string_label(fields, "version"));

    if include_experimental {
        values.push(bool_label(fields, "experimental"));
    }

    values
}

fn string_label(fields: &FieldMap, key: &str) -> String {
    fields.get(key).map_or_else(|| "n/a".to_string(), ToString::to_string)
}

fn bool_label(fields: &FieldMap, key: &str) -> String {
    if matches!(fields.get(key), Some(Value::Bool(true))) {
        "true".to_string()
    } else {
        "false".to_string()
    }
}
