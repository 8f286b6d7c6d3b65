//! The station source abstraction.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::StationTable;

use super::error::StationError;

/// Something that can produce a station table snapshot.
///
/// Each call returns an immutable table. Callers hold on to the `Arc` for
/// the length of one request, so a reload never changes a table that a
/// ranking is already reading.
#[async_trait]
pub trait StationSource: Send + Sync {
    /// Load the current station table.
    async fn load(&self) -> Result<Arc<StationTable>, StationError>;
}

/// A fixed, in-memory station table.
#[derive(Debug, Clone, Default)]
pub struct StaticStations {
    table: Arc<StationTable>,
}

impl StaticStations {
    /// Serve the given table on every load.
    pub fn new(table: StationTable) -> Self {
        Self {
            table: Arc::new(table),
        }
    }
}

#[async_trait]
impl StationSource for StaticStations {
    async fn load(&self) -> Result<Arc<StationTable>, StationError> {
        Ok(Arc::clone(&self.table))
    }
}

#[async_trait]
impl<S: StationSource + ?Sized> StationSource for Arc<S> {
    async fn load(&self) -> Result<Arc<StationTable>, StationError> {
        (**self).load().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Station;

    #[tokio::test]
    async fn static_source_returns_same_snapshot() {
        let source = StaticStations::new(StationTable::new(vec![Station::new(
            "A", "", 0.0, 0.0,
        )]));

        let first = source.load().await.unwrap();
        let second = source.load().await.unwrap();

        assert_eq!(first.len(), 1);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn usable_as_trait_object() {
        let source: Arc<dyn StationSource> = Arc::new(StaticStations::default());
        assert!(source.load().await.unwrap().is_empty());
    }
}
