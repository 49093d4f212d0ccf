//! Periodic sweep removing expired records from the registry.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::time::MissedTickBehavior;

use crate::domain::repositories::UrlRegistry;
use crate::infrastructure::remote_log::RemoteLogger;

const PACKAGE: &str = "cleanup_worker";

/// Runs the cleanup sweep on a fixed interval, forever.
///
/// Expiry is already enforced lazily on every read; the sweep only
/// reclaims memory and returns expired codes to the usable namespace.
/// `MissedTickBehavior::Delay` keeps a slow sweep from being immediately
/// rescheduled, so ticks never overlap.
pub async fn run_cleanup_worker<R: UrlRegistry>(
    registry: Arc<R>,
    interval: Duration,
    remote_log: RemoteLogger,
) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    // The first tick completes immediately; skip it so the first real
    // sweep happens one full interval after startup.
    ticker.tick().await;

    loop {
        ticker.tick().await;

        match registry.cleanup_expired(Utc::now()).await {
            Ok(removed) => {
                tracing::info!(removed, "cleanup sweep finished");
                remote_log.log(
                    "info",
                    PACKAGE,
                    format!("cleanup removed {} expired records", removed),
                );
                metrics::counter!("cleanup_removed_total").increment(removed as u64);
            }
            Err(e) => {
                tracing::error!("cleanup sweep failed: {}", e);
            }
        }
    }
}
