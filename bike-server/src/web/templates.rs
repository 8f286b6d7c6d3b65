//! Askama templates for the web frontend.

use askama::Template;

use crate::nearest::RankedStation;
use crate::reply::{QueryLocation, map_view_url};

/// Nearby stations page.
#[derive(Template)]
#[template(path = "nearby.html")]
pub struct NearbyTemplate {
    pub title: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub stations: Vec<StationView>,
    pub map_url: String,
}

impl NearbyTemplate {
    /// Build the page for a query and its ranked stations.
    pub fn new(query: &QueryLocation, ranked: &[RankedStation<'_>]) -> Self {
        Self {
            title: query.title.clone().unwrap_or_default(),
            address: query.address.clone().unwrap_or_default(),
            latitude: query.point.latitude,
            longitude: query.point.longitude,
            stations: ranked.iter().map(StationView::from_ranked).collect(),
            map_url: map_view_url(query.point),
        }
    }
}

/// Station view model for templates.
#[derive(Debug, Clone)]
pub struct StationView {
    pub name: String,
    pub address: String,
    pub distance: String,
}

impl StationView {
    pub fn from_ranked(ranked: &RankedStation<'_>) -> Self {
        Self {
            name: ranked.station.name.clone(),
            address: ranked.station.address.clone(),
            distance: format!("{} m", ranked.rounded_meters()),
        }
    }
}
