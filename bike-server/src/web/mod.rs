//! Web layer for the bike station finder.
//!
//! Exposes nearest-station lookups over HTTP, as JSON, HTML, or reply text.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
