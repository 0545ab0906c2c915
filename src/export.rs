//! Orchestration of one export cycle.
//!
//! [`build_batch`] is a pure function of (timestamp, snapshot) → samples; it
//! performs no I/O and keeps no state across calls. [`Exporter`] composes it
//! with a sink so the whole batch is submitted in one call.

use crate::Result;
use crate::metrics::{
    NESTED_STRATEGY_SCHEMA, MetricSchema, ProductCategory, RESERVED_FIELDS, Sample, flatten, resolve_labels,
};
use crate::sink::VictoriaSink;
use crate::snapshot::{FieldMap, Snapshot, Value};
use chrono::{DateTime, Utc};
use ohno::bail;

const LOG_TARGET: &str = "export";

/// Produce the complete sample batch for one export timestamp.
///
/// Simple categories emit one sample per instance field, skipping reserved
/// keys and null values. Router guard instances additionally unroll their
/// nested `strategies` map: each strategy's fields are flattened to dot-joined
/// paths and emitted under the nested-strategy schema, with falsy values
/// coerced to zero (nested path only; elsewhere falsy non-null values pass
/// through unchanged).
///
/// A router guard instance with a missing or non-map `strategies` field is a
/// data-contract violation and fails the whole batch.
pub fn build_batch(at: DateTime<Utc>, snapshot: &Snapshot) -> Result<Vec<Sample>> {
    let mut batch = Vec::new();

    for category in ProductCategory::SIMPLE {
        let schema = category.schema();
        for (instance_id, fields) in snapshot.category(category) {
            collect_instance(&mut batch, schema, instance_id, fields, at)?;
        }
    }

    let schema = ProductCategory::RouterGuard.schema();
    for (instance_id, fields) in &snapshot.router_guard {
        collect_instance(&mut batch, schema, instance_id, fields, at)?;
        collect_strategies(&mut batch, instance_id, fields, at)?;
    }

    Ok(batch)
}

/// Emit samples for one instance's direct fields.
fn collect_instance(
    batch: &mut Vec<Sample>,
    schema: &'static MetricSchema,
    instance_id: &str,
    fields: &FieldMap,
    at: DateTime<Utc>,
) -> Result<()> {
    for (key, value) in fields {
        if RESERVED_FIELDS.contains(&key.as_str()) || *value == Value::Null {
            continue;
        }

        let label_values = resolve_labels(fields, &[instance_id, key], schema.experimental);
        batch.push(Sample::build(schema.metric, schema.labels, label_values, value, at)?);
    }

    Ok(())
}

/// Emit samples for the strategies nested under one router guard instance.
///
/// Label resolution draws address/version/experimental from the router guard
/// instance's own field map; the strategy map contributes only the flattened
/// field paths and values.
fn collect_strategies(
    batch: &mut Vec<Sample>,
    instance_id: &str,
    fields: &FieldMap,
    at: DateTime<Utc>,
) -> Result<()> {
    let strategies = match fields.get("strategies") {
        Some(Value::Map(strategies)) => strategies,
        Some(_) => bail!("router_guard instance '{instance_id}': 'strategies' is not a map"),
        None => bail!("router_guard instance '{instance_id}': missing 'strategies' field"),
    };

    for (strategy_id, strategy_fields) in strategies {
        let Value::Map(strategy_fields) = strategy_fields else {
            bail!("router_guard instance '{instance_id}': strategy '{strategy_id}' is not a map");
        };

        for (key, value) in &flatten(strategy_fields) {
            if RESERVED_FIELDS.contains(&key.as_str()) || *value == Value::Null {
                continue;
            }

            let label_values = resolve_labels(fields, &[instance_id, strategy_id, key], true);

            // Falsy-to-zero coercion, deliberately asymmetric with the
            // null-exclusion rule used on the direct-field paths.
            let value = if value.is_falsy() { Value::Int(0) } else { value.clone() };

            batch.push(Sample::build(
                NESTED_STRATEGY_SCHEMA.metric,
                NESTED_STRATEGY_SCHEMA.labels,
                label_values,
                &value,
                at,
            )?);
        }
    }

    Ok(())
}

/// Composes the batch builder with a sink. One sink submission per export
/// call; the batch is never split or streamed.
#[derive(Debug)]
pub struct Exporter {
    sink: VictoriaSink,
}

impl Exporter {
    #[must_use]
    pub const fn new(sink: VictoriaSink) -> Self {
        Self { sink }
    }

    /// Export one snapshot at one timestamp, returning the number of samples
    /// submitted.
    pub async fn export(&self, at: DateTime<Utc>, snapshot: &Snapshot) -> Result<usize> {
        let batch = build_batch(at, snapshot)?;
        log::debug!(target: LOG_TARGET, "built {} samples for timestamp {at}", batch.len());

        self.sink.submit(&batch).await?;
        log::info!(target: LOG_TARGET, "exported {} samples for timestamp {at}", batch.len());

        Ok(batch.len())
    }
}
