//! Exports protocol metric snapshots to a VictoriaMetrics-compatible backend.
//!
//! The upstream data producer hands over one nested snapshot per export cycle:
//! product category → instance → field → value. This crate flattens that
//! structure into timestamped metric samples, maps identifier fields onto a
//! fixed per-category label schema, and pushes the whole batch to the backend
//! in a single gzip-compressed JSONL import request.
//!
//! # Module Organization
//!
//! - [`snapshot`]: Input data model (nested value tree, per-category instance maps)
//! - [`metrics`]: Flattening, sanitization, label resolution, and sample construction
//! - [`export`]: Orchestration of one export cycle across all product categories
//! - [`sink`]: JSONL + gzip serialization and HTTP submission

/// Result type alias using `ohno::AppError` as the default error type.
pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

pub mod export;
pub mod metrics;
pub mod sink;
pub mod snapshot;

pub use export::{Exporter, build_batch};
pub use metrics::Sample;
pub use sink::VictoriaSink;
pub use snapshot::{FieldMap, Snapshot, Value};
