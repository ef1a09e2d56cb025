//! Decoding of raw update parameters into a typed [`Metric`].
//!
//! All validation happens here, before the store is touched: the store only
//! ever sees metrics whose value representation matches their kind.

use serde::Deserialize;

use crate::error::{MemstatError, Result};
use crate::metric::{Metric, MetricKind, MetricValue};

/// Raw `/update/{type}/{name}/{value}` path segments.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRequest {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub value: String,
}

impl UpdateRequest {
    pub fn new(kind: impl Into<String>, name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
            value: value.into(),
        }
    }

    /// Validate and convert into a metric.
    ///
    /// Checks run in order: kind, then value, then name.
    pub fn into_metric(self, max_name_len: usize) -> Result<Metric> {
        let kind: MetricKind = self.kind.parse()?;
        let value = MetricValue::parse(kind, &self.value)?;

        if self.name.is_empty() {
            return Err(MemstatError::BadRequest("metric name must not be empty".into()));
        }
        if self.name.len() > max_name_len {
            return Err(MemstatError::BadRequest(format!(
                "metric name exceeds {max_name_len} bytes"
            )));
        }

        Ok(Metric::new(self.name, value))
    }
}
