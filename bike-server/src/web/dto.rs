//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::GeoPoint;
use crate::nearest::RankedStation;
use crate::reply::QueryLocation;

/// Query parameters for a nearby-station lookup.
#[derive(Debug, Deserialize)]
pub struct NearbyRequest {
    /// Latitude in decimal degrees
    pub lat: f64,

    /// Longitude in decimal degrees
    pub lon: f64,

    /// Optional place title to echo in the reply
    pub title: Option<String>,

    /// Optional street address to echo in the reply
    pub address: Option<String>,

    /// How many stations to return (defaults to the configured limit)
    pub limit: Option<usize>,
}

impl NearbyRequest {
    /// The shared location described by this request.
    pub fn location(&self) -> QueryLocation {
        QueryLocation {
            point: GeoPoint::new(self.lat, self.lon),
            title: self.title.clone(),
            address: self.address.clone(),
        }
    }
}

/// A location message, as forwarded by the messaging integration.
#[derive(Debug, Deserialize)]
pub struct LocationMessage {
    pub latitude: f64,
    pub longitude: f64,
    pub title: Option<String>,
    pub address: Option<String>,
}

impl LocationMessage {
    /// The shared location described by this message.
    pub fn location(self) -> QueryLocation {
        QueryLocation {
            point: GeoPoint::new(self.latitude, self.longitude),
            title: self.title,
            address: self.address,
        }
    }
}

/// The location that was queried.
#[derive(Debug, Serialize)]
pub struct QueryResult {
    pub latitude: f64,
    pub longitude: f64,
    pub title: Option<String>,
    pub address: Option<String>,
}

impl QueryResult {
    pub fn from_location(location: &QueryLocation) -> Self {
        Self {
            latitude: location.point.latitude,
            longitude: location.point.longitude,
            title: location.title.clone(),
            address: location.address.clone(),
        }
    }
}

/// A station in the results.
#[derive(Debug, Serialize)]
pub struct StationResult {
    /// Station name
    pub name: String,

    /// Street address
    pub address: String,

    pub latitude: f64,
    pub longitude: f64,

    /// Distance from the query point, whole metres
    pub distance_m: f64,
}

impl StationResult {
    pub fn from_ranked(ranked: &RankedStation<'_>) -> Self {
        Self {
            name: ranked.station.name.clone(),
            address: ranked.station.address.clone(),
            latitude: ranked.station.latitude,
            longitude: ranked.station.longitude,
            distance_m: ranked.rounded_meters(),
        }
    }
}

/// Response for a nearby-station lookup.
#[derive(Debug, Serialize)]
pub struct NearbyResponse {
    /// The queried location
    pub query: QueryResult,

    /// Nearest stations, nearest first
    pub stations: Vec<StationResult>,

    /// Link to the external map view
    pub map_url: String,

    /// The same result as reply text
    pub text: String,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
