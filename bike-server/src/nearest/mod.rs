//! Nearest-station resolution.
//!
//! Given a query point and a station table, computes the great-circle
//! distance to every station and returns the closest few, nearest first.

mod config;
mod distance;
mod rank;

pub use config::{DEFAULT_LIMIT, DEFAULT_MAX_LIMIT, NearbyConfig};
pub use distance::{EARTH_RADIUS_KM, haversine_km, haversine_km_batch};
pub use rank::{RankedStation, rank_nearest};
