//! Great-circle distance using the haversine formula.

use crate::domain::GeoPoint;

/// Mean earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points, in kilometres.
///
/// Inputs are decimal degrees. NaN in either point yields NaN.
///
/// # Examples
///
/// ```
/// use bike_server::domain::GeoPoint;
/// use bike_server::nearest::haversine_km;
///
/// let d = haversine_km(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 1.0));
/// assert!((d - 111.195).abs() < 0.001);
/// ```
pub fn haversine_km(from: GeoPoint, to: GeoPoint) -> f64 {
    Origin::new(from).distance_km(to)
}

/// Distances from `origin` to each of `points`, in kilometres, in order.
///
/// Equivalent to calling [`haversine_km`] per point, but the origin's
/// trigonometry is computed once for the whole batch.
pub fn haversine_km_batch<I>(origin: GeoPoint, points: I) -> Vec<f64>
where
    I: IntoIterator<Item = GeoPoint>,
{
    let origin = Origin::new(origin);
    points.into_iter().map(|p| origin.distance_km(p)).collect()
}

/// The origin of a batch, with its radian latitude and cosine precomputed.
struct Origin {
    lat: f64,
    lon: f64,
    cos_lat: f64,
}

impl Origin {
    fn new(point: GeoPoint) -> Self {
        let lat = point.latitude.to_radians();
        Self {
            lat,
            lon: point.longitude.to_radians(),
            cos_lat: lat.cos(),
        }
    }

    fn distance_km(&self, to: GeoPoint) -> f64 {
        let lat = to.latitude.to_radians();
        let lon = to.longitude.to_radians();

        let half_dlat = ((lat - self.lat) / 2.0).sin();
        let half_dlon = ((lon - self.lon) / 2.0).sin();
        let a = half_dlat * half_dlat + self.cos_lat * lat.cos() * half_dlon * half_dlon;

        // Rounding can push a hair above 1 for antipodal points.
        EARTH_RADIUS_KM * 2.0 * a.sqrt().clamp(0.0, 1.0).asin()
    }
}
