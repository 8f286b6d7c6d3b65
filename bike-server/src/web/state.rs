//! Application state for the web layer.

use std::sync::Arc;

use crate::nearest::NearbyConfig;
use crate::stations::StationSource;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Where station tables come from
    pub stations: Arc<dyn StationSource>,

    /// Nearest-station query configuration
    pub config: Arc<NearbyConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(stations: impl StationSource + 'static, config: NearbyConfig) -> Self {
        Self {
            stations: Arc::new(stations),
            config: Arc::new(config),
        }
    }
}
