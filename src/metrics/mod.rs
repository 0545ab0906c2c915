//! Flattening and label mapping of snapshot fields into metric samples.
//!
//! This module holds the rules that turn one instance's nested field map into
//! flat, timestamped samples: which product category maps to which metric name
//! and label schema, how nested maps are unrolled into dot-joined paths, how
//! identifier fields become label values, and how scalar values are sanitized
//! before serialization.
//!
//! # Implementation Model
//!
//! The label schemas are compile-time data on [`ProductCategory`] rather than
//! a runtime lookup table, so a category can never resolve to a missing or
//! misspelled schema. The pipeline for one field is:
//!
//! 1. [`flatten`] the instance's field map (nested strategies only)
//! 2. [`resolve_labels`] from the identifier fields of the instance
//! 3. [`Sample::build`] pairs schema label names with the resolved values,
//!    sanitizes the field value, and stamps the sample

mod flatten;
mod labels;
mod sample;
mod sanitize;
mod schema;

pub use flatten::flatten;
pub use labels::resolve_labels;
pub use sample::Sample;
pub use sanitize::{sanitize, sanitize_label_name};
pub use schema::{MetricSchema, NESTED_STRATEGY_SCHEMA, ProductCategory, RESERVED_FIELDS};
