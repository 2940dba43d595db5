//! Periodic removal of abandoned import sessions.
//!
//! Operators may close the import dialog without cancelling; their parsed
//! records would otherwise stay in memory until restart.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio_util::sync::CancellationToken;

use crate::import_sessions::ImportSessionStore;

/// How often the sweep runs.
const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// Run the sweep loop until `cancel` is triggered, dropping sessions idle
/// for longer than `ttl`.
pub async fn run(store: Arc<ImportSessionStore>, ttl: Duration, cancel: CancellationToken) {
    let ttl = chrono::Duration::from_std(ttl).unwrap_or(chrono::Duration::hours(1));

    tracing::info!(
        ttl_secs = ttl.num_seconds(),
        interval_secs = SWEEP_INTERVAL.as_secs(),
        "Import session sweep started"
    );

    let mut interval = tokio::time::interval(SWEEP_INTERVAL);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Import session sweep stopping");
                break;
            }
            _ = interval.tick() => {
                let purged = store.purge_idle(Utc::now() - ttl).await;
                if purged > 0 {
                    tracing::info!(purged, "Import session sweep: dropped idle sessions");
                } else {
                    tracing::debug!("Import session sweep: nothing to drop");
                }
            }
        }
    }
}
