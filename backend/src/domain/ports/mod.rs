//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod city_cache;
mod city_weather_query;
mod coordinate_resolver;
mod forecast_source;
mod http_fetch;

#[cfg(test)]
pub use city_cache::MockCityCache;
pub use city_cache::CityCache;
#[cfg(test)]
pub use city_weather_query::MockCityWeatherQuery;
pub use city_weather_query::{CityWeatherQuery, FixtureCityWeatherQuery, WeatherQueryError};
#[cfg(test)]
pub use coordinate_resolver::MockCoordinateResolver;
pub use coordinate_resolver::{CoordinateResolver, CoordinateResolverError};
#[cfg(test)]
pub use forecast_source::MockForecastSource;
pub use forecast_source::{ForecastSource, ForecastSourceError};
#[cfg(test)]
pub use http_fetch::MockHttpFetch;
pub use http_fetch::{HttpFetch, HttpFetchError};
