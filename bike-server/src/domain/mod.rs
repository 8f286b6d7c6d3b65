//! Domain types for the bike station finder.
//!
//! Stations and coordinates as the rest of the crate sees them. Range
//! checks live here so callers at the edge can validate once and the
//! numeric code can stay total.

mod point;
mod station;

pub use point::{GeoPoint, InvalidCoordinate};
pub use station::{Station, StationTable};
