//! Serialization and HTTP submission of sample batches.

use crate::Result;
use crate::metrics::Sample;
use bytes::Bytes;
use flate2::Compression;
use flate2::write::GzEncoder;
use ohno::{IntoAppError, bail};
use std::io::Write;
use url::Url;

const LOG_TARGET: &str = "sink";

/// Environment variable overriding the backend base URL.
const BASE_URL_ENV: &str = "VM_URL";

const DEFAULT_BASE_URL: &str = "http://victoria-metrics:8428";

/// Import endpoint, relative to the base URL.
const IMPORT_PATH: &str = "api/v1/import";

/// Submits sample batches to a VictoriaMetrics-compatible backend.
///
/// Each batch is serialized as newline-delimited JSON, gzip-compressed, and
/// POSTed to the backend's import endpoint in one request. The sink holds no
/// state beyond the resolved endpoint and a reusable HTTP client.
#[derive(Debug)]
pub struct VictoriaSink {
    client: reqwest::Client,
    import_url: Url,
}

impl VictoriaSink {
    /// Create a sink against `base_url`, falling back to the default backend
    /// address when none is given.
    pub fn new(base_url: Option<&str>) -> Result<Self> {
        let base = base_url.unwrap_or(DEFAULT_BASE_URL);
        let base = Url::parse(base).into_app_err_with(|| format!("parsing metrics backend URL '{base}'"))?;
        let import_url = base
            .join(IMPORT_PATH)
            .into_app_err_with(|| format!("building import endpoint from '{base}'"))?;

        Ok(Self {
            client: reqwest::Client::new(),
            import_url,
        })
    }

    /// Create a sink from the `VM_URL` environment variable, falling back to
    /// the default backend address when unset.
    pub fn from_env() -> Result<Self> {
        let base = std::env::var(BASE_URL_ENV).ok();
        Self::new(base.as_deref())
    }

    /// Submit one batch in a single request.
    ///
    /// An empty batch still produces a POST; the backend treats an empty
    /// import as a no-op. A non-success response status is surfaced as an
    /// error so callers see backend rejections rather than silent data loss.
    pub async fn submit(&self, batch: &[Sample]) -> Result<()> {
        let payload = encode_batch(batch)?;
        log::debug!(
            target: LOG_TARGET,
            "submitting {} samples ({} bytes compressed) to {}",
            batch.len(),
            payload.len(),
            self.import_url
        );

        let response = self
            .client
            .post(self.import_url.clone())
            .header(reqwest::header::CONTENT_ENCODING, "gzip")
            .header(reqwest::header::CONNECTION, "close")
            .body(payload)
            .send()
            .await
            .into_app_err("posting samples to metrics backend")?;

        let status = response.status();
        if !status.is_success() {
            bail!("metrics backend rejected import with HTTP {status}");
        }

        log::debug!(target: LOG_TARGET, "backend accepted {} samples", batch.len());
        Ok(())
    }
}

/// Serialize a batch as gzip-compressed JSONL, one sample per line.
fn encode_batch(batch: &[Sample]) -> Result<Bytes> {
    let mut lines = Vec::with_capacity(batch.len());
    for sample in batch {
        lines.push(serde_json::to_string(sample).into_app_err("serializing sample")?);
    }
    let jsonl = lines.join("\n");

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(jsonl.as_bytes())
        .into_app_err("compressing sample batch")?;
    let compressed = encoder.finish().into_app_err("compressing sample batch")?;

    Ok(Bytes::from(compressed))
}
