use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a single request attempt ended. A response carries its status; a
/// request that produced no response carries the failure class instead.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OutcomeKind {
    /// Response received with the expected status.
    Expected { status: u16 },
    /// Response received, status differs from the expected one.
    UnexpectedStatus { status: u16 },
    /// The request or body read exceeded the per-request timeout.
    TimedOut,
    /// Connect, DNS, reset or other transport failure before a full response.
    Transport { detail: String },
}

impl OutcomeKind {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, OutcomeKind::Expected { .. })
    }
}

/// The recorded result of one request attempt. Created once at completion,
/// never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct Outcome {
    pub worker: usize,
    pub sequence: u64,
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: OutcomeKind,
    /// Present only when a full response was received; a request that failed
    /// before any byte arrived has no latency, not a zero latency.
    #[serde(rename = "latency_ms", serialize_with = "serialize_latency_ms")]
    pub latency: Option<Duration>,
    pub response_bytes: u64,
}

impl Outcome {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.kind.is_success()
    }
}

#[must_use]
pub fn duration_to_ms(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

fn serialize_latency_ms<S>(latency: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match latency {
        Some(value) => serializer.serialize_some(&duration_to_ms(*value)),
        None => serializer.serialize_none(),
    }
}

/// Aggregate over every outcome of a finished run. Latency statistics cover
/// only outcomes with a recorded latency and are `None` when there are none.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub total_requests: u64,
    pub successful_requests: u64,
    pub failed_requests: u64,
    pub timeout_requests: u64,
    pub transport_errors: u64,
    pub unexpected_status: u64,
    pub success_rate_pct: f64,
    pub avg_latency_ms: Option<f64>,
    pub median_latency_ms: Option<f64>,
    pub min_latency_ms: Option<f64>,
    pub max_latency_ms: Option<f64>,
    pub stddev_latency_ms: Option<f64>,
    pub duration_ms: u64,
    pub requests_per_second: f64,
}

/// Unloaded single-request reference measured before the run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaselineStats {
    pub latency_ms: f64,
    /// Loaded mean latency relative to the baseline, in percent; `None` when
    /// the run produced no latency samples.
    pub degradation_pct: Option<f64>,
}

/// The full exportable result of one run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub summary: RunSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline: Option<BaselineStats>,
    pub outcomes: Vec<Outcome>,
}
