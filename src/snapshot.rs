//! Input data model for one export cycle.
//!
//! A [`Snapshot`] is the full nested structure the data producer delivers per
//! export call: one instance map per product category, where each instance
//! carries a [`FieldMap`] of field name → [`Value`]. Values form a tree
//! (scalars at the leaves, maps at inner nodes); arrays have no meaning in
//! this model and are rejected at deserialization time.

use crate::metrics::ProductCategory;
use core::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One instance's field set, keyed by field name.
pub type FieldMap = BTreeMap<String, Value>;

/// All instances of one product category, keyed by instance identifier.
pub type InstanceMap = BTreeMap<String, FieldMap>;

/// A single field value: a scalar leaf or a nested map.
///
/// Deserializes untagged, so producer JSON like `{"tvl": 500, "meta": {...}}`
/// maps directly onto the variants. Unsupported JSON shapes (arrays) fail
/// deserialization rather than being coerced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Map(FieldMap),
}

impl Value {
    /// Whether this value is "falsy" in the sense of the nested-strategy
    /// zero-coercion rule: `false`, `0`, `0.0`, or the empty string.
    /// Null is not included; null fields are excluded upstream instead.
    #[must_use]
    pub fn is_falsy(&self) -> bool {
        match self {
            Self::Bool(b) => !b,
            Self::Int(i) => *i == 0,
            Self::Float(f) => *f == 0.0,
            Self::Str(s) => s.is_empty(),
            Self::Null | Self::Map(_) => false,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Str(s) => f.write_str(s),
            Self::Map(m) => match serde_json::to_string(m) {
                Ok(json) => f.write_str(&json),
                Err(_) => Err(core::fmt::Error),
            },
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<FieldMap> for Value {
    fn from(m: FieldMap) -> Self {
        Self::Map(m)
    }
}

/// The full nested input structure for one export call.
///
/// Categories absent from the producer payload deserialize as empty maps;
/// unrecognized categories are rejected.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct Snapshot {
    pub token: InstanceMap,
    pub pool: InstanceMap,
    pub router: InstanceMap,
    pub vault: InstanceMap,
    pub strategy: InstanceMap,
    pub router_guard: InstanceMap,
}

impl Snapshot {
    /// The instance map for one product category.
    #[must_use]
    pub const fn category(&self, category: ProductCategory) -> &InstanceMap {
        match category {
            ProductCategory::Token => &self.token,
            ProductCategory::Pool => &self.pool,
            ProductCategory::Router => &self.router,
            ProductCategory::Vault => &self.vault,
            ProductCategory::Strategy => &self.strategy,
            ProductCategory::RouterGuard => &self.router_guard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_scalar_variants() {
        let map: FieldMap = serde_json::from_str(
            r#"{"a": null, "b": true, "c": 7, "d": 0.5, "e": "hi"}"#,
        )
        .unwrap();

        assert_eq!(map["a"], Value::Null);
        assert_eq!(map["b"], Value::Bool(true));
        assert_eq!(map["c"], Value::Int(7));
        assert_eq!(map["d"], Value::Float(0.5));
        assert_eq!(map["e"], Value::Str("hi".to_string()));
    }

    #[test]
    fn test_deserialize_nested_map() {
        let map: FieldMap = serde_json::from_str(r#"{"outer": {"inner": 1}}"#).unwrap();

        let Value::Map(nested) = &map["outer"] else {
            panic!("expected a nested map");
        };
        assert_eq!(nested["inner"], Value::Int(1));
    }

    #[test]
    fn test_deserialize_rejects_arrays() {
        let result = serde_json::from_str::<FieldMap>(r#"{"a": [1, 2]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_snapshot_missing_categories_default_empty() {
        let snapshot: Snapshot = serde_json::from_str(r#"{"pool": {}}"#).unwrap();
        assert!(snapshot.pool.is_empty());
        assert!(snapshot.token.is_empty());
        assert!(snapshot.router_guard.is_empty());
    }

    #[test]
    fn test_snapshot_rejects_unknown_category() {
        let result = serde_json::from_str::<Snapshot>(r#"{"farm": {}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_display_renderings() {
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Bool(false).to_string(), "false");
        assert_eq!(Value::Int(-3).to_string(), "-3");
        assert_eq!(Value::Float(0.25).to_string(), "0.25");
        assert_eq!(Value::Str("0xabc".to_string()).to_string(), "0xabc");
    }

    #[test]
    fn test_is_falsy() {
        assert!(Value::Bool(false).is_falsy());
        assert!(Value::Int(0).is_falsy());
        assert!(Value::Float(0.0).is_falsy());
        assert!(Value::Str(String::new()).is_falsy());

        assert!(!Value::Bool(true).is_falsy());
        assert!(!Value::Int(1).is_falsy());
        assert!(!Value::Str("x".to_string()).is_falsy());
        assert!(!Value::Null.is_falsy());
    }

    #[test]
    fn test_category_accessor() {
        let mut snapshot = Snapshot::default();
        let _ = snapshot.vault.insert("v1".to_string(), FieldMap::new());

        assert_eq!(snapshot.category(ProductCategory::Vault).len(), 1);
        assert!(snapshot.category(ProductCategory::Token).is_empty());
    }
}
