//! Snapshot caching for station sources.
//!
//! Loading a table means reading a file or an HTTP round trip. Requests
//! within the TTL share one `Arc<StationTable>` snapshot instead.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache as MokaCache;

use crate::domain::StationTable;

use super::error::StationError;
use super::source::StationSource;

/// Default time a loaded table stays fresh: 5 minutes.
const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

/// Configuration for the snapshot cache.
#[derive(Debug, Clone)]
pub struct StationCacheConfig {
    /// How long a loaded table is reused.
    pub ttl: Duration,
}

impl StationCacheConfig {
    /// Create a config with the given TTL.
    pub fn new(ttl: Duration) -> Self {
        Self { ttl }
    }
}

impl Default for StationCacheConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

/// Station source with a TTL cache in front.
///
/// Wraps any `StationSource`. A failed load is not cached, so the next
/// request retries.
pub struct CachedStationSource<S> {
    inner: S,
    tables: MokaCache<(), Arc<StationTable>>,
}

impl<S: StationSource> CachedStationSource<S> {
    /// Wrap `inner` with the given cache configuration.
    pub fn new(inner: S, config: &StationCacheConfig) -> Self {
        let tables = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(1)
            .build();

        Self { inner, tables }
    }

    /// Drop the cached table so the next load hits the source.
    pub async fn invalidate(&self) {
        self.tables.invalidate(&()).await;
    }
}

#[async_trait]
impl<S: StationSource> StationSource for CachedStationSource<S> {
    async fn load(&self) -> Result<Arc<StationTable>, StationError> {
        if let Some(table) = self.tables.get(&()).await {
            return Ok(table);
        }

        let table = self.inner.load().await?;
        tracing::info!(stations = table.len(), "station table refreshed");

        self.tables.insert((), Arc::clone(&table)).await;

        Ok(table)
    }
}
