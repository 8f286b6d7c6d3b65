//! Nearest-station ranking.
//!
//! Ranks every station in a table by distance from a query point and
//! keeps the closest few.

use crate::domain::{GeoPoint, Station, StationTable};

use super::distance::haversine_km_batch;

/// A station paired with its distance from the query point.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedStation<'a> {
    /// Position of the station in the source table.
    pub index: usize,

    /// The station itself, borrowed from the table.
    pub station: &'a Station,

    /// Great-circle distance from the query point, in metres.
    pub distance_m: f64,
}

impl RankedStation<'_> {
    /// Distance rounded to the nearest whole metre (half away from zero).
    pub fn rounded_meters(&self) -> f64 {
        self.distance_m.round()
    }
}

/// Rank stations by distance from `query`, nearest first.
///
/// Distances for the whole table are computed in one batch. Stations at
/// equal distance keep their table order, and stations with a NaN distance
/// sort after all others. At most `limit` entries are returned; an empty
/// table gives an empty result.
///
/// The table is only borrowed, so the same snapshot can be ranked from any
/// number of requests at once.
pub fn rank_nearest(
    query: GeoPoint,
    table: &StationTable,
    limit: usize,
) -> Vec<RankedStation<'_>> {
    let distances = haversine_km_batch(query, table.iter().map(Station::location));

    let mut ranked: Vec<RankedStation<'_>> = table
        .iter()
        .zip(distances)
        .enumerate()
        .map(|(index, (station, km))| RankedStation {
            index,
            station,
            distance_m: km * 1000.0,
        })
        .collect();

    // `sort_by` is stable, which gives table order for ties.
    ranked.sort_by(|a, b| a.distance_m.total_cmp(&b.distance_m));
    ranked.truncate(limit);

    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(name: &str, lat: f64, lon: f64) -> Station {
        Station::new(name, format!("{name} address"), lat, lon)
    }

    fn names<'a>(ranked: &[RankedStation<'a>]) -> Vec<&'a str> {
        ranked.iter().map(|r| r.station.name.as_str()).collect()
    }

    #[test]
    fn station_at_query_point_ranks_first_with_zero() {
        let table = StationTable::new(vec![
            station("Station B", 22.6400, 120.3100),
            station("Station A", 22.6273, 120.3014),
            station("Station C", 22.6000, 120.2900),
        ]);

        let ranked = rank_nearest(GeoPoint::new(22.6273, 120.3014), &table, 3);

        assert_eq!(ranked[0].station.name, "Station A");
        assert_eq!(ranked[0].distance_m, 0.0);
        assert_eq!(ranked[0].index, 1);
    }

    #[test]
    fn one_degree_longitude() {
        let table = StationTable::new(vec![station("East", 0.0, 1.0)]);

        let ranked = rank_nearest(GeoPoint::new(0.0, 0.0), &table, 3);

        assert_eq!(ranked.len(), 1);
        assert!((ranked[0].distance_m - 111_195.0).abs() < 1.0);
        assert_eq!(ranked[0].rounded_meters(), 111_195.0);
    }

    #[test]
    fn orders_by_distance() {
        let table = StationTable::new(vec![
            station("far", 0.0, 0.03),
            station("near", 0.0, 0.01),
            station("mid", 0.0, 0.02),
        ]);

        let ranked = rank_nearest(GeoPoint::new(0.0, 0.0), &table, 3);

        assert_eq!(names(&ranked), ["near", "mid", "far"]);
    }

    #[test]
    fn truncates_to_limit() {
        let table: StationTable = (0..10_i32)
            .map(|i| station(&format!("s{i}"), 0.0, f64::from(i) * 0.001))
            .collect();

        let ranked = rank_nearest(GeoPoint::new(0.0, 0.0), &table, 3);

        assert_eq!(names(&ranked), ["s0", "s1", "s2"]);
    }

    #[test]
    fn fewer_stations_than_limit() {
        let table = StationTable::new(vec![station("only", 1.0, 1.0)]);

        let ranked = rank_nearest(GeoPoint::new(0.0, 0.0), &table, 3);

        assert_eq!(ranked.len(), 1);
    }

    #[test]
    fn empty_table_gives_empty_result() {
        let table = StationTable::empty();
        assert!(rank_nearest(GeoPoint::new(0.0, 0.0), &table, 3).is_empty());
    }

    #[test]
    fn zero_limit() {
        let table = StationTable::new(vec![station("a", 0.0, 0.0)]);
        assert!(rank_nearest(GeoPoint::new(0.0, 0.0), &table, 0).is_empty());
    }

    #[test]
    fn ties_keep_table_order() {
        // North and south are equidistant; the two dups share a spot
        let table = StationTable::new(vec![
            station("north", 0.01, 0.0),
            station("dup-1", 0.0, 0.05),
            station("south", -0.01, 0.0),
            station("dup-2", 0.0, 0.05),
        ]);

        let ranked = rank_nearest(GeoPoint::new(0.0, 0.0), &table, 4);

        assert_eq!(names(&ranked), ["north", "south", "dup-1", "dup-2"]);
    }

    #[test]
    fn nan_distances_sort_last() {
        let table = StationTable::new(vec![
            station("broken", f64::NAN, 0.0),
            station("fine", 0.0, 0.01),
        ]);

        let ranked = rank_nearest(GeoPoint::new(0.0, 0.0), &table, 2);

        assert_eq!(names(&ranked), ["fine", "broken"]);
        assert!(ranked[1].distance_m.is_nan());
    }

    #[test]
    fn table_is_untouched() {
        let table = StationTable::new(vec![
            station("b", 0.0, 0.02),
            station("a", 0.0, 0.01),
        ]);
        let before = table.clone();

        let _ = rank_nearest(GeoPoint::new(0.0, 0.0), &table, 1);

        assert_eq!(table, before);
    }
}
