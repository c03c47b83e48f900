//! Driving port answering multi-city weather requests.
use async_trait::async_trait;

use super::define_port_error;
use crate::domain::{Error, WeatherReport};

define_port_error! {
    /// Request-level failures. Any one of them aborts the whole batch.
    pub enum WeatherQueryError {
        /// No city names were supplied.
        NoCities =>
            "Please supply a comma delimited list of cities as the URL parameter 'city'",
        /// The named city could not be geocoded.
        NoCoordinates { city: String } => "Could not find co-ordinates for city: {city}",
        /// No forecast could be fetched for the named city.
        NoForecast { city: String } => "Could not get a weather forecast for the city: {city}",
    }
}

impl From<WeatherQueryError> for Error {
    fn from(value: WeatherQueryError) -> Self {
        Error::invalid_request(value.to_string())
    }
}

/// Port consumed by inbound adapters to answer weather requests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CityWeatherQuery: Send + Sync {
    /// Produce forecasts for `cities`, in order.
    async fn forecast(&self, cities: &[String]) -> Result<WeatherReport, WeatherQueryError>;
}

/// Fixture implementation returning an empty report.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureCityWeatherQuery;

#[async_trait]
impl CityWeatherQuery for FixtureCityWeatherQuery {
    async fn forecast(&self, _cities: &[String]) -> Result<WeatherReport, WeatherQueryError> {
        Ok(WeatherReport::default())
    }
}
