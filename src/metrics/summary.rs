use std::time::Duration;

use super::types::{Outcome, OutcomeKind, RunSummary, duration_to_ms};

/// Computes the run summary from the full outcome collection. Call only
/// after every worker has finished; partial aggregation is meaningless.
#[must_use]
pub fn summarize(outcomes: &[Outcome], duration: Duration) -> RunSummary {
    let total = outcomes.len() as u64;
    let mut successful: u64 = 0;
    let mut timeouts: u64 = 0;
    let mut transport: u64 = 0;
    let mut unexpected: u64 = 0;

    for outcome in outcomes {
        match &outcome.kind {
            OutcomeKind::Expected { .. } => successful = successful.saturating_add(1),
            OutcomeKind::UnexpectedStatus { .. } => unexpected = unexpected.saturating_add(1),
            OutcomeKind::TimedOut => timeouts = timeouts.saturating_add(1),
            OutcomeKind::Transport { .. } => transport = transport.saturating_add(1),
        }
    }
    let failed = total.saturating_sub(successful);

    let mut latencies: Vec<f64> = outcomes
        .iter()
        .filter_map(|outcome| outcome.latency)
        .map(duration_to_ms)
        .collect();
    latencies.sort_by(f64::total_cmp);

    let success_rate_pct = if total > 0 {
        successful as f64 * 100.0 / total as f64
    } else {
        0.0
    };
    let requests_per_second = if total > 0 {
        total as f64 / duration.as_secs_f64().max(f64::MIN_POSITIVE)
    } else {
        0.0
    };

    RunSummary {
        total_requests: total,
        successful_requests: successful,
        failed_requests: failed,
        timeout_requests: timeouts,
        transport_errors: transport,
        unexpected_status: unexpected,
        success_rate_pct,
        avg_latency_ms: mean(&latencies),
        median_latency_ms: median_of_sorted(&latencies),
        min_latency_ms: latencies.first().copied(),
        max_latency_ms: latencies.last().copied(),
        stddev_latency_ms: sample_stddev(&latencies),
        duration_ms: u64::try_from(duration.as_millis()).unwrap_or(u64::MAX),
        requests_per_second,
    }
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

fn median_of_sorted(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mid = values.len() / 2;
    if values.len() % 2 == 1 {
        values.get(mid).copied()
    } else {
        let lower = values.get(mid.saturating_sub(1))?;
        let upper = values.get(mid)?;
        Some((lower + upper) / 2.0)
    }
}

fn sample_stddev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let avg = mean(values)?;
    let sum_sq: f64 = values
        .iter()
        .map(|value| (value - avg) * (value - avg))
        .sum();
    Some((sum_sq / (values.len().saturating_sub(1)) as f64).sqrt())
}
