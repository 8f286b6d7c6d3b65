//! Configuration for nearest-station lookups.

/// Number of stations returned when the caller doesn't ask for a count.
pub const DEFAULT_LIMIT: usize = 3;

/// Upper bound on a caller-requested count.
pub const DEFAULT_MAX_LIMIT: usize = 20;

/// Parameters for nearest-station queries.
#[derive(Debug, Clone)]
pub struct NearbyConfig {
    /// How many stations to return by default.
    pub limit: usize,

    /// Largest count a request may ask for.
    /// Requests above this are clamped.
    pub max_limit: usize,
}

impl NearbyConfig {
    /// Create a configuration with the given default and maximum.
    pub fn new(limit: usize, max_limit: usize) -> Self {
        Self { limit, max_limit }
    }

    /// Resolve a request's optional count against this configuration.
    pub fn resolve_limit(&self, requested: Option<usize>) -> usize {
        requested.unwrap_or(self.limit).min(self.max_limit)
    }
}

impl Default for NearbyConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            max_limit: DEFAULT_MAX_LIMIT,
        }
    }
}
