//! Warm-up Refresh Task
//!
//! Background task that warms the cache at startup and periodically afterwards.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::warmup::Warmer;

/// Runs one full warm-up and waits for its page stores.
///
/// Returns whether every page was fetched and stored. Failures are logged,
/// never propagated.
pub async fn run_warmup(warmer: &Warmer) -> bool {
    let report = match warmer.warm().await {
        Ok(report) => report,
        Err(e) => {
            error!("Warm-up failed: {}", e);
            return false;
        }
    };

    if let Some(failure) = &report.failure {
        warn!(
            "Warm-up stopped at page {} of {}: {}",
            failure.page, report.total_pages, failure.error
        );
    }
    let complete = report.is_complete();
    let total_pages = report.total_pages;

    let outcome = report.tasks.join().await;
    info!(
        "Warm-up finished: {} pages, {} background stores ok, {} failed",
        total_pages,
        outcome.stored.len(),
        outcome.failed.len()
    );

    complete && outcome.failed.is_empty()
}

/// Spawns a task that warms the cache now and then every `refresh_interval_secs`.
///
/// An interval of 0 warms once and exits.
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
pub fn spawn_refresh_task(warmer: Warmer, refresh_interval_secs: u64) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!(
            "Starting warm-up task with refresh interval of {} seconds",
            refresh_interval_secs
        );

        loop {
            run_warmup(&warmer).await;

            if refresh_interval_secs == 0 {
                break;
            }
            tokio::time::sleep(Duration::from_secs(refresh_interval_secs)).await;
        }
    })
}
