//! Station table loaded from a JSON file on disk.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::StationTable;

use super::error::StationError;
use super::record::parse_table;
use super::source::StationSource;

/// Reads the dataset file on every load.
///
/// The file is expected to hold a JSON array of station records. Pair this
/// with [`CachedStationSource`](super::CachedStationSource) to avoid
/// re-reading it for every request.
#[derive(Debug, Clone)]
pub struct FileStationSource {
    path: PathBuf,
}

impl FileStationSource {
    /// Create a source reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the dataset file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl StationSource for FileStationSource {
    async fn load(&self) -> Result<Arc<StationTable>, StationError> {
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| StationError::Io {
                path: self.path.display().to_string(),
                message: e.to_string(),
            })?;

        let table = parse_table(&contents)?;
        tracing::debug!(
            path = %self.path.display(),
            stations = table.len(),
            "loaded station file"
        );

        Ok(Arc::new(table))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn loads_stations_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stations.json");
        std::fs::write(
            &path,
            r#"[
                {"name": "A", "address": "a st", "lat": 22.62, "lon": 120.30},
                {"name": "B", "address": "b st", "lat": 22.63, "lon": 120.31}
            ]"#,
        )
        .unwrap();

        let table = FileStationSource::new(&path).load().await.unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table[0].name, "A");
        assert_eq!(table[1].name, "B");
    }

    #[tokio::test]
    async fn reads_file_again_on_each_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stations.json");
        let source = FileStationSource::new(&path);

        std::fs::write(&path, r#"[{"name": "A", "lat": 0.0, "lon": 0.0}]"#).unwrap();
        let first = source.load().await.unwrap();

        std::fs::write(&path, "[]").unwrap();
        let second = source.load().await.unwrap();

        assert_eq!(first.len(), 1);
        assert!(second.is_empty());
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let source = FileStationSource::new("/nonexistent/path/stations.json");

        let err = source.load().await.unwrap_err();

        assert!(matches!(err, StationError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/path/stations.json"));
    }

    #[tokio::test]
    async fn malformed_file_is_json_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stations.json");
        std::fs::write(&path, "not json").unwrap();

        let err = FileStationSource::new(&path).load().await.unwrap_err();

        assert!(matches!(err, StationError::Json { .. }));
    }
}
