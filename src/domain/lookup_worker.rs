//! Background worker persisting lookup events.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_retry::{
    Retry,
    strategy::{ExponentialBackoff, jitter},
};

use crate::domain::lookup_event::LookupEvent;
use crate::domain::repositories::LookupLogRepository;

// Delays of 10ms, 100ms, 1s before giving up on an event.
const RETRY_BASE_DELAY_MS: u64 = 10;
const RETRY_ATTEMPTS: usize = 3;

/// Drains the lookup channel and records each event.
///
/// Inserts are retried with exponential backoff and jitter. An event that
/// still fails after the last attempt is dropped with a warning and a
/// `tracking_log_failures_total` counter increment; lookup logging is
/// best-effort by contract.
pub async fn run_lookup_worker(
    mut rx: mpsc::Receiver<LookupEvent>,
    repository: Arc<dyn LookupLogRepository>,
) {
    while let Some(event) = rx.recv().await {
        let strategy = ExponentialBackoff::from_millis(RETRY_BASE_DELAY_MS)
            .map(jitter)
            .take(RETRY_ATTEMPTS);

        let result = Retry::spawn(strategy, || repository.record(event.clone())).await;

        if let Err(e) = result {
            metrics::counter!("tracking_log_failures_total").increment(1);
            tracing::warn!(
                tracking_number = %event.tracking_number,
                "failed to record tracking lookup: {e}"
            );
        }
    }

    tracing::debug!("lookup worker channel closed, shutting down");
}
