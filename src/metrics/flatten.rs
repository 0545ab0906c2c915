use crate::snapshot::{FieldMap, Value};

/// Collapse a possibly-nested field map into a single level, joining nested
/// keys onto their parent with a `.` separator.
///
/// `{"a": {"b": {"c": 1}}}` becomes `{"a.b.c": 1}`. Non-map leaves, including
/// null, pass through unchanged; an empty nested map contributes nothing. The
/// input is tree-shaped, so the recursion terminates at the deepest leaf.
#[must_use]
pub fn flatten(map: &FieldMap) -> FieldMap {
    let mut flat = FieldMap::new();
    for (key, value) in map {
        match value {
            Value::Map(nested) => {
                for (subkey, subvalue) in flatten(nested) {
                    let _ = flat.insert(format!("{key}.{subkey}"), subvalue);
                }
            }
            leaf => {
                let _ = flat.insert(key.clone(), leaf.clone());
            }
        }
    }

    flat
}
