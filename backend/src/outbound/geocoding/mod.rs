//! Geocoding adapter turning city names into coordinates.

mod dto;
mod resolver;

pub use resolver::{DEFAULT_GEOCODING_URL, NominatimResolver};
