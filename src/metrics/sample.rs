use super::sanitize::{sanitize, sanitize_label_name};
use crate::Result;
use crate::snapshot::Value;
use chrono::{DateTime, Utc};
use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

/// One timestamped metric sample, ready for JSONL submission.
///
/// Serializes in the backend's import format:
///
/// ```json
/// {"metric": {"pair": "p1", "param": "tvl", ..., "__name__": "pool"}, "values": [500], "timestamps": [1700000000000]}
/// ```
///
/// Label pairs keep the schema's declared order, with the reserved `__name__`
/// label last.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    metric: &'static str,
    labels: Vec<(String, String)>,
    value: Value,
    timestamp_ms: i64,
}

impl Sample {
    /// Build one sample from a schema's metric name and label names, the
    /// resolved label values, the raw field value, and the export timestamp.
    ///
    /// `label_names` and `label_values` must have equal length; the
    /// orchestrator upholds this by construction and a mismatch is a caller
    /// bug (the zip silently truncates). The timestamp is floored to whole
    /// seconds before conversion to milliseconds. Fails only when the value
    /// does not sanitize to a scalar.
    pub fn build(
        metric: &'static str,
        label_names: &[&str],
        label_values: Vec<String>,
        value: &Value,
        at: DateTime<Utc>,
    ) -> Result<Self> {
        let labels = label_names
            .iter()
            .map(|name| sanitize_label_name(name))
            .zip(label_values)
            .collect();

        Ok(Self {
            metric,
            labels,
            value: sanitize(value)?,
            timestamp_ms: at.timestamp() * 1000,
        })
    }

    #[must_use]
    pub const fn metric(&self) -> &'static str {
        self.metric
    }

    #[must_use]
    pub fn labels(&self) -> &[(String, String)] {
        &self.labels
    }

    /// The label value at `name`, if the sample carries that label.
    #[must_use]
    pub fn label(&self, name: &str) -> Option<&str> {
        self.labels
            .iter()
            .find(|(label, _)| label == name)
            .map(|(_, value)| value.as_str())
    }

    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.value
    }

    #[must_use]
    pub const fn timestamp_ms(&self) -> i64 {
        self.timestamp_ms
    }
}

impl Serialize for Sample {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut record = serializer.serialize_struct("Sample", 3)?;
        record.serialize_field("metric", &Labels(self))?;
        record.serialize_field("values", &[&self.value])?;
        record.serialize_field("timestamps", &[self.timestamp_ms])?;
        record.end()
    }
}

/// Serializes the label pairs as a JSON object in declaration order, with
/// `__name__` appended last.
struct Labels<'a>(&'a Sample);

impl Serialize for Labels<'_> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.labels.len() + 1))?;
        for (name, value) in &self.0.labels {
            map.serialize_entry(name, value)?;
        }
        map.serialize_entry("__name__", self.0.metric)?;
        map.end()
    }
}
