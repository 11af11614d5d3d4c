use std::time::Duration;

use chrono::Utc;
use reqwest::Client;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use url::Url;

use crate::http::execute_probe_request;
use crate::metrics::Outcome;

pub(super) struct WorkerContext {
    pub(super) client: Client,
    pub(super) url: Url,
    pub(super) expected_status: u16,
    pub(super) requests_per_worker: u64,
    pub(super) inter_request_delay: Duration,
}

/// One simulated user: a strictly sequential request stream. Request N+1 is
/// issued only after request N completed and the inter-request delay passed.
/// Failures are recorded and the stream continues.
pub(super) fn spawn_worker(
    worker: usize,
    context: WorkerContext,
    outcome_tx: mpsc::UnboundedSender<Outcome>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        for sequence in 0..context.requests_per_worker {
            if sequence > 0 && !context.inter_request_delay.is_zero() {
                sleep(context.inter_request_delay).await;
            }

            let response =
                execute_probe_request(&context.client, &context.url, context.expected_status).await;
            let outcome = Outcome {
                worker,
                sequence,
                timestamp: Utc::now(),
                kind: response.kind,
                latency: response.latency,
                response_bytes: response.response_bytes,
            };

            if outcome_tx.send(outcome).is_err() {
                // Collector is gone; nothing left to record against.
                break;
            }
        }
    })
}
