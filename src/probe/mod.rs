//! The concurrent probe core: a fixed worker fleet against one endpoint,
//! lossless outcome collection, aggregation strictly after the join barrier.
mod baseline;
mod collector;
mod plan;
mod worker;

#[cfg(test)]
mod test_support;

pub use plan::ProbePlan;

use tokio::sync::mpsc;
use tokio::time::Instant;
use tracing::{error, info};

use crate::error::AppResult;
use crate::http::build_client;
use crate::metrics::{self, BaselineStats, RunReport};

/// Runs the probe to completion and aggregates every outcome.
///
/// Once validation and client setup succeed the run itself cannot fail:
/// per-request timeouts and transport errors are absorbed into outcomes and
/// a 0% success rate is a reported result, not an error.
///
/// # Errors
///
/// Returns an error for an invalid plan or when the HTTP client cannot be
/// built, in both cases strictly before any request is issued.
pub async fn run(plan: &ProbePlan) -> AppResult<RunReport> {
    plan.validate()?;
    let client = build_client(
        plan.request_timeout,
        &plan.headers,
        plan.bearer.as_deref(),
    )?;

    info!(
        url = %plan.url,
        mode = plan.mode.as_str(),
        concurrency = plan.concurrency,
        requests_per_worker = plan.requests_per_worker,
        "Starting probe run"
    );

    let baseline_latency_ms = if plan.baseline {
        baseline::measure_baseline(&client, &plan.url, plan.expected_status).await
    } else {
        None
    };

    let started = Instant::now();
    let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
    let collector = collector::spawn_outcome_collector(outcome_rx);

    let mut workers = Vec::with_capacity(plan.concurrency);
    for worker_id in 0..plan.concurrency {
        let context = worker::WorkerContext {
            client: client.clone(),
            url: plan.url.clone(),
            expected_status: plan.expected_status,
            requests_per_worker: plan.requests_per_worker,
            inter_request_delay: plan.inter_request_delay,
        };
        workers.push(worker::spawn_worker(worker_id, context, outcome_tx.clone()));
    }
    // The collector resolves once the last sender is gone.
    drop(outcome_tx);

    for handle in workers {
        if let Err(err) = handle.await {
            error!("Worker task failed to join: {}", err);
        }
    }

    let outcomes = collector.await?;
    let duration = started.elapsed();
    let summary = metrics::summarize(&outcomes, duration);

    let baseline = baseline_latency_ms.map(|latency_ms| BaselineStats {
        latency_ms,
        degradation_pct: degradation_pct(latency_ms, summary.avg_latency_ms),
    });

    info!(
        total = summary.total_requests,
        successful = summary.successful_requests,
        failed = summary.failed_requests,
        "Probe run complete"
    );

    Ok(RunReport {
        summary,
        baseline,
        outcomes,
    })
}

fn degradation_pct(baseline_ms: f64, avg_latency_ms: Option<f64>) -> Option<f64> {
    avg_latency_ms.and_then(|avg| {
        if baseline_ms > 0.0 {
            Some((avg / baseline_ms - 1.0) * 100.0)
        } else {
            None
        }
    })
}
