use reqwest::Client;
use tracing::{info, warn};
use url::Url;

use crate::http::execute_probe_request;
use crate::metrics::duration_to_ms;

/// Measures one unloaded request before the fleet starts. Any received
/// response counts as a reference point, whatever its status; a request
/// with no response yields no baseline, never a run failure.
pub(super) async fn measure_baseline(
    client: &Client,
    url: &Url,
    expected_status: u16,
) -> Option<f64> {
    let response = execute_probe_request(client, url, expected_status).await;
    match response.latency {
        Some(latency) => {
            let latency_ms = duration_to_ms(latency);
            info!("Baseline latency: {:.1}ms", latency_ms);
            Some(latency_ms)
        }
        None => {
            warn!("Baseline request received no response; degradation will not be reported.");
            None
        }
    }
}
