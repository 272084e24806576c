//! Expiry Sweep Task
//!
//! Periodically purges expired entries from a local driver, so keys that are
//! never read again do not hold capacity until evicted.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::driver::LocalDriver;

/// Spawns a task that calls [`LocalDriver::purge_expired`] every `interval`.
///
/// The task runs until aborted through the returned handle.
///
/// # Example
/// ```ignore
/// let driver = Arc::new(LocalDriver::new(1000)?);
/// let cleanup_handle = spawn_cleanup_task(driver.clone(), Duration::from_secs(1));
/// // Later, during shutdown:
/// cleanup_handle.abort();
/// ```
pub fn spawn_cleanup_task(driver: Arc<LocalDriver>, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("Starting expiry sweep with interval of {:?}", interval);

        loop {
            tokio::time::sleep(interval).await;

            let removed = driver.purge_expired().await;

            if removed > 0 {
                info!("Expiry sweep: removed {} expired entries", removed);
            } else {
                debug!("Expiry sweep: no expired entries found");
            }
        }
    })
}
