use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::metrics::Outcome;

/// Drains worker outcomes into one collection. Resolves once every sender
/// handle has been dropped, i.e. after the last worker finished.
pub(super) fn spawn_outcome_collector(
    mut outcome_rx: mpsc::UnboundedReceiver<Outcome>,
) -> JoinHandle<Vec<Outcome>> {
    tokio::spawn(async move {
        let mut outcomes = Vec::new();
        while let Some(outcome) = outcome_rx.recv().await {
            outcomes.push(outcome);
        }
        outcomes
    })
}
