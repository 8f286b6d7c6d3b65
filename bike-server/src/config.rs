//! Server configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::nearest::{DEFAULT_LIMIT, DEFAULT_MAX_LIMIT, NearbyConfig};
use crate::stations::StationCacheConfig;

/// Address the server binds to when `BIKE_BIND_ADDR` is unset.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Dataset file used when neither `BIKE_STATIONS_URL` nor
/// `BIKE_STATIONS_FILE` is set.
pub const DEFAULT_STATIONS_FILE: &str = "stations.json";

/// Longest accepted station cache TTL: one year.
pub const MAX_STATIONS_TTL_SECS: u64 = 365 * 24 * 60 * 60;

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set to a value that couldn't be parsed
    #[error("invalid value for {key}: {value:?} ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Where the station dataset comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetLocation {
    File(PathBuf),
    Url(String),
}

/// Full server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub dataset: DatasetLocation,
    pub cache: StationCacheConfig,
    pub nearby: NearbyConfig,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    ///
    /// | Variable                 | Default            |
    /// |--------------------------|--------------------|
    /// | `BIKE_BIND_ADDR`         | `127.0.0.1:3000`   |
    /// | `BIKE_STATIONS_URL`      | unset              |
    /// | `BIKE_STATIONS_FILE`     | `stations.json`    |
    /// | `BIKE_STATIONS_TTL_SECS` | `300` (max 1 year) |
    /// | `BIKE_NEARBY_LIMIT`      | `3`                |
    ///
    /// A URL takes precedence over a file when both are set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr: SocketAddr =
            parse_or("BIKE_BIND_ADDR", get("BIKE_BIND_ADDR"), DEFAULT_BIND_ADDR)?;

        let dataset = match (get("BIKE_STATIONS_URL"), get("BIKE_STATIONS_FILE")) {
            (Some(url), _) => DatasetLocation::Url(url),
            (None, Some(path)) => DatasetLocation::File(PathBuf::from(path)),
            (None, None) => DatasetLocation::File(PathBuf::from(DEFAULT_STATIONS_FILE)),
        };

        let ttl_secs: u64 = parse_or(
            "BIKE_STATIONS_TTL_SECS",
            get("BIKE_STATIONS_TTL_SECS"),
            "300",
        )?;
        if ttl_secs > MAX_STATIONS_TTL_SECS {
            return Err(ConfigError::Invalid {
                key: "BIKE_STATIONS_TTL_SECS",
                value: ttl_secs.to_string(),
                reason: format!("must be at most {MAX_STATIONS_TTL_SECS} seconds"),
            });
        }

        let limit: usize = parse_or(
            "BIKE_NEARBY_LIMIT",
            get("BIKE_NEARBY_LIMIT"),
            &DEFAULT_LIMIT.to_string(),
        )?;
        let nearby = NearbyConfig::new(limit, DEFAULT_MAX_LIMIT.max(limit));

        Ok(Self {
            bind_addr,
            dataset,
            cache: StationCacheConfig::new(Duration::from_secs(ttl_secs)),
            nearby,
        })
    }
}

fn parse_or<T>(key: &'static str, value: Option<String>, default: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let raw = value.unwrap_or_else(|| default.to_string());
    raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        value: raw.clone(),
        reason: e.to_string(),
    })
}
