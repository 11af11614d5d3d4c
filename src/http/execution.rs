use std::time::Duration;

use futures_util::StreamExt;
use reqwest::Client;
use tokio::time::Instant;
use tracing::warn;
use url::Url;

use crate::metrics::OutcomeKind;

#[derive(Debug)]
pub(crate) struct ProbeResponse {
    pub(crate) kind: OutcomeKind,
    /// Present only when the full response (status and body) was received.
    pub(crate) latency: Option<Duration>,
    pub(crate) response_bytes: u64,
}

/// Issues one GET and classifies the result. Never fails: every transport
/// condition becomes a tagged outcome kind.
pub(crate) async fn execute_probe_request(
    client: &Client,
    url: &Url,
    expected_status: u16,
) -> ProbeResponse {
    let started = Instant::now();
    match client.get(url.clone()).send().await {
        Ok(response) => {
            let status = response.status().as_u16();
            match drain_response_body(response).await {
                Ok(bytes) => {
                    let latency = started.elapsed();
                    let kind = if status == expected_status {
                        OutcomeKind::Expected { status }
                    } else {
                        OutcomeKind::UnexpectedStatus { status }
                    };
                    ProbeResponse {
                        kind,
                        latency: Some(latency),
                        response_bytes: bytes,
                    }
                }
                Err(err) => {
                    warn!("Failed to read response body: {}", err);
                    ProbeResponse {
                        kind: classify_transport_error(&err),
                        latency: None,
                        response_bytes: 0,
                    }
                }
            }
        }
        Err(err) => {
            warn!("Request failed: {}", err);
            ProbeResponse {
                kind: classify_transport_error(&err),
                latency: None,
                response_bytes: 0,
            }
        }
    }
}

fn classify_transport_error(err: &reqwest::Error) -> OutcomeKind {
    if err.is_timeout() {
        OutcomeKind::TimedOut
    } else {
        OutcomeKind::Transport {
            detail: err.to_string(),
        }
    }
}

async fn drain_response_body(response: reqwest::Response) -> Result<u64, reqwest::Error> {
    let mut stream = response.bytes_stream();
    let mut total_bytes: u64 = 0;
    while let Some(chunk) = stream.next().await {
        let bytes = chunk?;
        total_bytes = total_bytes.saturating_add(u64::try_from(bytes.len()).unwrap_or(u64::MAX));
    }
    Ok(total_bytes)
}
