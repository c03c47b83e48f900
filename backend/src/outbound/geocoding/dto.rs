//! DTOs for decoding geocoding search responses.
//!
//! The geocoder returns an array of candidates with string-typed coordinates.
//! Only the first candidate is mapped into a domain [`Coordinate`].

use serde::Deserialize;

use crate::domain::Coordinate;
use crate::domain::ports::CoordinateResolverError;

#[derive(Debug, Deserialize)]
pub(super) struct CandidateDto {
    #[serde(default)]
    pub(super) lat: String,
    #[serde(default)]
    pub(super) lon: String,
}

impl CandidateDto {
    pub(super) fn into_coordinate(self) -> Result<Coordinate, CoordinateResolverError> {
        let latitude = self
            .lat
            .parse::<f64>()
            .map_err(|_| CoordinateResolverError::bad_latitude(self.lat.as_str()))?;
        let longitude = self
            .lon
            .parse::<f64>()
            .map_err(|_| CoordinateResolverError::bad_longitude(self.lon.as_str()))?;
        Ok(Coordinate::new(latitude, longitude))
    }
}

pub(super) fn first_coordinate(body: &str) -> Result<Coordinate, CoordinateResolverError> {
    let candidates: Vec<CandidateDto> = serde_json::from_str(body)
        .map_err(|error| CoordinateResolverError::parse(error.to_string()))?;
    candidates
        .into_iter()
        .next()
        .ok_or_else(CoordinateResolverError::no_results)?
        .into_coordinate()
}
