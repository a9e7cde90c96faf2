//! Background order sweep.

use crate::store::{OrderStore, StoreError};
use std::sync::Arc;
use tokio::time::{sleep, Duration};
use voxdesk_grocery::Order;
use voxdesk_progress::{sweep_with, Clock, Progressor, SweepReport, SystemClock};

/// Advances every stored order once and saves the ones that moved.
///
/// Orders that fail to load are skipped by the store. An order that moves
/// but cannot be saved is logged and counted as failed; its file keeps the
/// old status and is retried on the next sweep. Only a failure to list the
/// order directory is returned.
pub fn run_sweep_once<C: Clock>(
    store: &OrderStore,
    progressor: &Progressor<C>,
) -> Result<SweepReport, StoreError> {
    let mut orders = store.load_all()?;

    let report = sweep_with(orders.iter_mut(), progressor, |order: &Order| {
        match store.save(order) {
            Ok(_) => true,
            Err(e) => {
                tracing::error!(
                    order_id = %order.order_id,
                    error = %e,
                    "failed to save advanced order"
                );
                false
            }
        }
    });

    Ok(report)
}

/// Starts the order sweep task.
///
/// This task runs indefinitely, sweeping the store every `interval`. File
/// access runs on the blocking pool.
pub async fn start_sweep_task(
    store: OrderStore,
    progressor: Progressor<SystemClock>,
    interval: Duration,
) {
    tracing::info!(
        dir = %store.dir().display(),
        interval_seconds = interval.as_secs(),
        "starting order sweep task"
    );

    let store = Arc::new(store);
    let progressor = Arc::new(progressor);

    loop {
        sleep(interval).await;

        let store = Arc::clone(&store);
        let progressor = Arc::clone(&progressor);
        let res =
            tokio::task::spawn_blocking(move || run_sweep_once(&*store, &*progressor)).await;

        match res {
            Ok(Ok(report)) => {
                if report.failed > 0 {
                    tracing::warn!(
                        advanced = report.advanced,
                        failed = report.failed,
                        total = report.total(),
                        "some advanced orders could not be saved"
                    );
                } else if report.advanced > 0 {
                    tracing::info!(
                        advanced = report.advanced,
                        total = report.total(),
                        unknown_status = report.unknown_status,
                        malformed = report.malformed,
                        "advanced orders"
                    );
                } else {
                    tracing::debug!(total = report.total(), "no orders to advance");
                }
            }
            Ok(Err(e)) => {
                tracing::error!(error = %e, "failed to sweep orders");
            }
            Err(e) => {
                tracing::error!(error = %e, "sweep task panicked or was cancelled");
            }
        }
    }
}
