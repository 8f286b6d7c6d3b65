//! Geographic coordinate type.

use std::fmt;

/// Error returned when a coordinate is outside the valid range.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid coordinate ({latitude}, {longitude}): {reason}")]
pub struct InvalidCoordinate {
    pub latitude: f64,
    pub longitude: f64,
    reason: &'static str,
}

/// A point on the earth's surface in signed decimal degrees.
///
/// Construction through [`GeoPoint::new`] is unchecked: the distance
/// functions accept any `f64` and let NaN propagate. Callers that take
/// coordinates from the outside world should go through
/// [`GeoPoint::checked`] instead.
///
/// # Examples
///
/// ```
/// use bike_server::domain::GeoPoint;
///
/// let kaohsiung = GeoPoint::checked(22.6273, 120.3014).unwrap();
/// assert_eq!(kaohsiung.latitude, 22.6273);
///
/// // Latitude beyond the poles is rejected
/// assert!(GeoPoint::checked(91.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a point without range checks.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Create a point, rejecting non-finite or out-of-range degrees.
    pub fn checked(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinate> {
        let point = Self::new(latitude, longitude);
        point.validate()?;
        Ok(point)
    }

    /// Check that latitude is in [-90, 90] and longitude in [-180, 180].
    pub fn validate(&self) -> Result<(), InvalidCoordinate> {
        let fail = |reason| InvalidCoordinate {
            latitude: self.latitude,
            longitude: self.longitude,
            reason,
        };

        if !self.latitude.is_finite() || !self.longitude.is_finite() {
            return Err(fail("must be finite"));
        }
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(fail("latitude must be within [-90, 90]"));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(fail("longitude must be within [-180, 180]"));
        }

        Ok(())
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}
