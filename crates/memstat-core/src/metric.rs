//! Metric model.
//!
//! The value is a tagged variant, so a metric's kind is always derived from
//! its payload and a gauge can never carry an integer (or vice versa).

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::MemstatError;

/// Closed set of supported metric kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    Gauge,
    Counter,
}

impl MetricKind {
    /// Wire name used in `/update/{type}/...` paths.
    pub fn as_str(self) -> &'static str {
        match self {
            MetricKind::Gauge => "gauge",
            MetricKind::Counter => "counter",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricKind {
    type Err = MemstatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gauge" => Ok(MetricKind::Gauge),
            "counter" => Ok(MetricKind::Counter),
            other => Err(MemstatError::InvalidKind(other.to_string())),
        }
    }
}

/// Kind-tagged numeric payload.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum MetricValue {
    Gauge(#[serde(serialize_with = "serialize_gauge")] f64),
    Counter(i64),
}

impl MetricValue {
    pub fn kind(&self) -> MetricKind {
        match self {
            MetricValue::Gauge(_) => MetricKind::Gauge,
            MetricValue::Counter(_) => MetricKind::Counter,
        }
    }

    /// Parse `raw` as the representation `kind` requires.
    pub fn parse(kind: MetricKind, raw: &str) -> Result<Self, MemstatError> {
        let invalid = || MemstatError::InvalidValue {
            kind,
            value: raw.to_string(),
        };
        match kind {
            MetricKind::Gauge => raw.parse::<f64>().map(MetricValue::Gauge).map_err(|_| invalid()),
            MetricKind::Counter => raw.parse::<i64>().map(MetricValue::Counter).map_err(|_| invalid()),
        }
    }

    /// Fold `update` into `self` according to the kind's merge rule.
    ///
    /// Gauges take the new value; counters add it. Counter sums wrap on
    /// overflow. Callers only merge values of the same kind; a mismatched
    /// update replaces the value outright.
    pub(crate) fn merge(&mut self, update: MetricValue) {
        match (self, update) {
            (MetricValue::Counter(cur), MetricValue::Counter(delta)) => {
                *cur = cur.wrapping_add(delta);
            }
            (slot, update) => *slot = update,
        }
    }
}

/// Spelling of non-finite gauges, shared by text and JSON output.
fn non_finite_str(v: f64) -> Option<&'static str> {
    if v.is_nan() {
        Some("NaN")
    } else if v == f64::INFINITY {
        Some("+Inf")
    } else if v == f64::NEG_INFINITY {
        Some("-Inf")
    } else {
        None
    }
}

// JSON has no NaN/Inf; emit them as strings instead of `null`.
fn serialize_gauge<S: Serializer>(v: &f64, s: S) -> Result<S::Ok, S::Error> {
    match non_finite_str(*v) {
        Some(text) => s.serialize_str(text),
        None => s.serialize_f64(*v),
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Gauge(v) => match non_finite_str(*v) {
                Some(text) => f.write_str(text),
                None => write!(f, "{v}"),
            },
            MetricValue::Counter(v) => write!(f, "{v}"),
        }
    }
}

/// A named metric. Identity is the pair `(name, kind)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    pub name: String,
    #[serde(flatten)]
    pub value: MetricValue,
}

impl Metric {
    pub fn new(name: impl Into<String>, value: MetricValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    pub fn gauge(name: impl Into<String>, v: f64) -> Self {
        Self::new(name, MetricValue::Gauge(v))
    }

    pub fn counter(name: impl Into<String>, v: i64) -> Self {
        Self::new(name, MetricValue::Counter(v))
    }

    pub fn kind(&self) -> MetricKind {
        self.value.kind()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn kind_from_wire_name() {
        assert_eq!("gauge".parse::<MetricKind>().unwrap(), MetricKind::Gauge);
        assert_eq!("counter".parse::<MetricKind>().unwrap(), MetricKind::Counter);
        assert!("Gauge".parse::<MetricKind>().is_err());
        assert!("histogram".parse::<MetricKind>().is_err());
    }

    #[test]
    fn value_parse_follows_kind() {
        assert_eq!(
            MetricValue::parse(MetricKind::Gauge, "1.5").unwrap(),
            MetricValue::Gauge(1.5)
        );
        assert_eq!(
            MetricValue::parse(MetricKind::Counter, "-7").unwrap(),
            MetricValue::Counter(-7)
        );
        // counters are integers only
        assert!(MetricValue::parse(MetricKind::Counter, "1.5").is_err());
        assert!(MetricValue::parse(MetricKind::Gauge, "abc").is_err());
        assert!(MetricValue::parse(MetricKind::Counter, "").is_err());
    }

    #[test]
    fn counter_merge_wraps() {
        let mut v = MetricValue::Counter(i64::MAX);
        v.merge(MetricValue::Counter(1));
        assert_eq!(v, MetricValue::Counter(i64::MIN));
    }

    #[test]
    fn display_matches_text_exposition() {
        assert_eq!(MetricValue::Gauge(2.0).to_string(), "2");
        assert_eq!(MetricValue::Gauge(0.25).to_string(), "0.25");
        assert_eq!(MetricValue::Counter(42).to_string(), "42");
        // positional, never exponent form
        assert_eq!(MetricValue::Gauge(1e21).to_string(), "1000000000000000000000");
        assert_eq!(MetricValue::Gauge(-0.5).to_string(), "-0.5");
    }

    #[test]
    fn display_non_finite_gauges() {
        assert_eq!(MetricValue::Gauge(f64::NAN).to_string(), "NaN");
        assert_eq!(MetricValue::Gauge(f64::INFINITY).to_string(), "+Inf");
        assert_eq!(MetricValue::Gauge(f64::NEG_INFINITY).to_string(), "-Inf");
    }

    #[test]
    fn non_finite_gauges_serialize_as_strings() {
        let json = serde_json::to_value(Metric::gauge("n", f64::NAN)).unwrap();
        assert_eq!(json, serde_json::json!({"name": "n", "type": "gauge", "value": "NaN"}));

        let json = serde_json::to_value(Metric::gauge("i", f64::NEG_INFINITY)).unwrap();
        assert_eq!(json["value"], "-Inf");
    }

    #[test]
    fn serializes_flat() {
        let m = Metric::counter("hits", 3);
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json, serde_json::json!({"name": "hits", "type": "counter", "value": 3}));
    }
}
