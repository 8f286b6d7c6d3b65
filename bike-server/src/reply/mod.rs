//! Reply formatting for nearest-station lookups.
//!
//! Turns a ranked station list into the text sent back to the user, with
//! a link to the external map view.

mod map_link;
mod text;

pub use map_link::{MAP_BASE_URL, MAP_QUERY, map_view_url};
pub use text::{QueryLocation, format_reply};
