//! Station dataset sources.
//!
//! The ranking code never loads data itself. A `StationSource` is handed
//! in instead and yields an immutable table snapshot per call, read from
//! memory, a JSON file, or an HTTP endpoint, optionally behind a TTL cache.

mod cache;
mod client;
mod error;
mod file;
mod record;
mod source;

pub use cache::{CachedStationSource, StationCacheConfig};
pub use client::{StationClient, StationClientConfig};
pub use error::StationError;
pub use file::FileStationSource;
pub use record::{StationRecord, build_table, parse_table};
pub use source::{StaticStations, StationSource};
