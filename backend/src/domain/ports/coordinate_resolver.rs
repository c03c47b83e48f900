//! Driven port turning a (city, country) pair into a coordinate.
//!
//! Adapters validate inputs before any network traffic and use only the first
//! geocoding candidate.
use async_trait::async_trait;

use super::define_port_error;
use crate::domain::Coordinate;

define_port_error! {
    /// Errors surfaced while resolving a city to a coordinate.
    pub enum CoordinateResolverError {
        /// The city argument was empty.
        EmptyCity => "You must supply a city",
        /// The country argument was empty.
        EmptyCountry => "You must supply a country",
        /// The geocoding request failed.
        Transport { message: String } => "HTTP GET error: {message}",
        /// The geocoding response was not the expected JSON.
        Parse { message: String } => "Unmarshal error: {message}",
        /// The geocoding service returned no candidates.
        NoResults => "No data found after unmarshal",
        /// The first candidate's latitude is not a decimal number.
        BadLatitude { value: String } => "Unrecognised latitude: {value}",
        /// The first candidate's longitude is not a decimal number.
        BadLongitude { value: String } => "Unrecognised longitude: {value}",
    }
}

/// Port resolving place names to coordinates.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CoordinateResolver: Send + Sync {
    /// Resolve `city` within `country`.
    async fn find(&self, city: &str, country: &str)
    -> Result<Coordinate, CoordinateResolverError>;
}
