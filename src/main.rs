//! Cacheable demo
//!
//! Loads every key given on the command line through a local driver, twice,
//! computing a stand-in value on the first pass, then prints the counters.
//!
//! ```text
//! CACHE_KEY_PREFIX=demo: RUST_LOG=cacheable=debug cacheable alpha beta alpha
//! ```

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cacheable::{spawn_cleanup_task, Cacheable, Config, LocalDriver, SerializerKind};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Computed {
    key: String,
    length: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cacheable=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: serializer={}, prefix={:?}, default_ttl={}s, ignore_err={}, max_entries={}",
        config.serializer, config.key_prefix, config.default_ttl, config.ignore_err, config.max_entries
    );

    let driver = Arc::new(
        LocalDriver::new(config.max_entries).context("invalid CACHE_MAX_ENTRIES")?,
    );
    let cleanup_handle =
        spawn_cleanup_task(driver.clone(), Duration::from_secs(config.cleanup_interval.max(1)));

    let cache: Cacheable<Computed, SerializerKind> = Cacheable::new(driver, config.options());

    let keys: Vec<String> = std::env::args().skip(1).collect();
    for _ in 0..2 {
        for key in &keys {
            let value = cache
                .load(key, || async {
                    tokio::time::sleep(Duration::from_millis(50)).await;
                    Ok::<_, anyhow::Error>(Computed {
                        key: key.clone(),
                        length: key.len(),
                    })
                })
                .await?;
            info!(key = %value.key, length = value.length, "Loaded");
        }
    }

    let stats = cache.stats();
    println!("{}", serde_json::to_string_pretty(&stats)?);
    info!("Hit rate: {:.2}", stats.hit_rate());

    cleanup_handle.abort();
    cache.close().await?;

    Ok(())
}
