//! Bike-share station records.

use std::ops::Deref;

use super::GeoPoint;

/// A bike-share dock location.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Station {
    /// Create a station.
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            latitude,
            longitude,
        }
    }

    /// The station's coordinates.
    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

/// An ordered, read-only set of stations.
///
/// Tables are shared between requests as `Arc<StationTable>` snapshots and
/// are never modified once built. Order matters: it breaks distance ties
/// when ranking.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StationTable {
    stations: Vec<Station>,
}

impl StationTable {
    /// Create a table from stations, preserving their order.
    pub fn new(stations: Vec<Station>) -> Self {
        Self { stations }
    }

    /// An empty table.
    pub fn empty() -> Self {
        Self::default()
    }
}

impl Deref for StationTable {
    type Target = [Station];

    fn deref(&self) -> &[Station] {
        &self.stations
    }
}

impl FromIterator<Station> for StationTable {
    fn from_iter<I: IntoIterator<Item = Station>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
