//! Map-view URL generation.
//!
//! The map itself is served by a separate application. Its route shape is
//! fixed, so the link is built from constants rather than configuration.

use crate::domain::GeoPoint;

/// Base of the external map application.
pub const MAP_BASE_URL: &str = "https://cbike.herokuapp.com";

/// Query string appended to every map link.
///
/// Tells the messaging app's in-app browser to hand the link to the
/// system browser.
pub const MAP_QUERY: &str = "openExternalBrowser=1";

/// Generate the map-view URL centred on `point`.
///
/// Coordinates are written with Rust's shortest float formatting, so whole
/// degrees appear as `0` rather than `0.0`. The map side parses both forms
/// as floats, so either resolves to the same view.
///
/// # Example
///
/// ```
/// use bike_server::domain::GeoPoint;
/// use bike_server::reply::map_view_url;
///
/// let url = map_view_url(GeoPoint::new(22.6273, 120.3014));
/// assert_eq!(
///     url,
///     "https://cbike.herokuapp.com/latlon/22.6273/120.3014?openExternalBrowser=1"
/// );
/// ```
pub fn map_view_url(point: GeoPoint) -> String {
    format!(
        "{}/latlon/{}/{}?{}",
        MAP_BASE_URL, point.latitude, point.longitude, MAP_QUERY
    )
}
