//! Wire format of the station dataset.

use serde::Deserialize;

use crate::domain::{GeoPoint, Station, StationTable};

use super::error::StationError;

/// One station as it appears in the dataset JSON.
///
/// Open-data exports disagree on coordinate key names, so both the short
/// and long spellings are accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct StationRecord {
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(alias = "latitude")]
    pub lat: f64,
    #[serde(alias = "longitude", alias = "lng")]
    pub lon: f64,
}

/// Parse a JSON array of station records into a table.
pub fn parse_table(json: &str) -> Result<StationTable, StationError> {
    let records: Vec<StationRecord> =
        serde_json::from_str(json).map_err(|e| StationError::Json {
            message: e.to_string(),
        })?;

    Ok(build_table(records))
}

/// Build a table from records, dropping any with invalid coordinates.
///
/// Record order is preserved.
pub fn build_table(records: Vec<StationRecord>) -> StationTable {
    records
        .into_iter()
        .filter_map(|r| match GeoPoint::checked(r.lat, r.lon) {
            Ok(_) => Some(Station::new(r.name, r.address, r.lat, r.lon)),
            Err(e) => {
                tracing::warn!(station = %r.name, error = %e, "skipping station record");
                None
            }
        })
        .collect()
}
