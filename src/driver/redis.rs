//! Redis driver, enabled with the `redis` cargo feature.

use std::time::Duration;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use tokio::sync::RwLock;
use tracing::info;

use super::Driver;
use crate::error::{CacheError, Result};

/// Driver backed by a shared Redis connection.
///
/// The connection manager reconnects on its own; every operation clones the
/// handle, so the driver can be used from many tasks at once. Closing drops
/// the driver's handle; commands already in flight finish on their clones.
pub struct RedisDriver {
    /// None once closed
    conn: RwLock<Option<ConnectionManager>>,
    /// Write with `SET NX`, reporting `KeyExists` when the key is taken
    atomic: bool,
}

/// Largest `PX` sent to the server. Redis rejects expiries whose absolute
/// time overflows i64 milliseconds, so anything longer is stored without
/// expiry.
const MAX_EXPIRY_MILLIS: u64 = (i64::MAX / 2) as u64;

impl RedisDriver {
    /// Connects to the server at `url` (e.g. `redis://127.0.0.1:6379`).
    pub async fn connect(url: &str) -> Result<Self> {
        let client = redis::Client::open(url).map_err(driver_err)?;
        let conn = ConnectionManager::new(client).await.map_err(driver_err)?;
        info!("Connected to redis at {}", url);

        Ok(Self::from_connection(conn))
    }

    /// Wraps an existing connection manager.
    pub fn from_connection(conn: ConnectionManager) -> Self {
        Self {
            conn: RwLock::new(Some(conn)),
            atomic: false,
        }
    }

    pub fn with_atomic(mut self, atomic: bool) -> Self {
        self.atomic = atomic;
        self
    }

    async fn connection(&self) -> Result<ConnectionManager> {
        self.conn.read().await.clone().ok_or(CacheError::Closed)
    }

    /// Returns true once `close` has released the connection.
    pub async fn is_closed(&self) -> bool {
        self.conn.read().await.is_none()
    }
}

#[async_trait]
impl Driver for RedisDriver {
    async fn get(&self, key: &str) -> Result<Vec<u8>> {
        let mut conn = self.connection().await?;

        let value: Option<Vec<u8>> = redis::cmd("GET")
            .arg(key)
            .query_async(&mut conn)
            .await
            .map_err(driver_err)?;

        value.ok_or_else(|| CacheError::NotFound(key.to_string()))
    }

    async fn set(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<()> {
        let mut conn = self.connection().await?;

        let mut cmd = redis::cmd("SET");
        cmd.arg(key).arg(value);
        if let Some(millis) = expiry_millis(ttl) {
            cmd.arg("PX").arg(millis);
        }

        if !self.atomic {
            let _: () = cmd.query_async(&mut conn).await.map_err(driver_err)?;
            return Ok(());
        }

        cmd.arg("NX");
        // Nil reply means the key was already set
        let reply: Option<String> = cmd.query_async(&mut conn).await.map_err(driver_err)?;
        match reply {
            Some(_) => Ok(()),
            None => Err(CacheError::KeyExists(key.to_string())),
        }
    }

    async fn del(&self, key: &str) -> Result<()> {
        let mut conn = self.connection().await?;

        let removed: i64 = redis::cmd("DEL")
            .arg(key)
            .query_async(&mut conn)
            .await
            .map_err(driver_err)?;

        if removed == 0 {
            return Err(CacheError::NotFound(key.to_string()));
        }
        Ok(())
    }

    async fn close(&self) -> Result<()> {
        if self.conn.write().await.take().is_some() {
            info!("Released redis connection");
        }
        Ok(())
    }
}

fn driver_err(err: redis::RedisError) -> CacheError {
    CacheError::Driver(err.to_string())
}

/// `PX` argument for `ttl`. Zero, or a TTL too long for the server to
/// represent, means no expiry; sub-millisecond TTLs round up so they still
/// expire.
fn expiry_millis(ttl: Duration) -> Option<u64> {
    if ttl.is_zero() {
        return None;
    }
    u64::try_from(ttl.as_millis())
        .ok()
        .filter(|millis| *millis <= MAX_EXPIRY_MILLIS)
        .map(|millis| millis.max(1))
}
