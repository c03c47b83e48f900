//! Weather orchestration for multi-city forecast requests.
//!
//! Each city is served from the cache when possible. On a miss the city is
//! geocoded, its forecast fetched, trimmed to the forecast window, and cached.
//! Cities are processed sequentially in request order and the first failure
//! aborts the whole request.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::TimeDelta;
use mockable::Clock;
use tracing::{info, warn};

use crate::domain::ports::{
    CityCache, CityWeatherQuery, CoordinateResolver, ForecastSource, WeatherQueryError,
};
use crate::domain::{CityForecast, ForecastPeriod, ForecastSummary, WeatherReport};

/// Country every city is resolved against.
pub const DEFAULT_COUNTRY: &str = "usa";

/// Hours ahead of "now" in which a period must start to be reported.
pub const FORECAST_WINDOW_HOURS: i64 = 48;

/// Weather service implementing the [`CityWeatherQuery`] driving port.
pub struct CityWeatherService<C, R, F> {
    cache: Arc<C>,
    resolver: Arc<R>,
    source: Arc<F>,
    clock: Arc<dyn Clock>,
}

impl<C, R, F> CityWeatherService<C, R, F> {
    /// Create a new service over the given adapters.
    pub fn new(cache: Arc<C>, resolver: Arc<R>, source: Arc<F>, clock: Arc<dyn Clock>) -> Self {
        Self {
            cache,
            resolver,
            source,
            clock,
        }
    }
}

impl<C, R, F> CityWeatherService<C, R, F>
where
    C: CityCache,
    R: CoordinateResolver,
    F: ForecastSource,
{
    async fn city_forecast(&self, city: &str) -> Result<Vec<ForecastSummary>, WeatherQueryError> {
        if let Some(forecasts) = self.cache.get(city).await {
            info!(%city, "serving cached forecast");
            return Ok(forecasts);
        }

        let position = self
            .resolver
            .find(city, DEFAULT_COUNTRY)
            .await
            .map_err(|error| {
                warn!(%city, %error, "coordinate lookup failed");
                WeatherQueryError::no_coordinates(city)
            })?;

        let periods = self.source.fetch(position).await.map_err(|error| {
            warn!(%city, %error, "forecast fetch failed");
            WeatherQueryError::no_forecast(city)
        })?;

        let forecasts = self.within_window(&periods);
        self.cache.store(city, forecasts.clone()).await;
        info!(%city, periods = forecasts.len(), "cached fresh forecast");
        Ok(forecasts)
    }

    /// Keep the leading periods that start before the window closes.
    ///
    /// Periods are assumed sorted by start; the first late period ends the
    /// scan even if later ones would qualify.
    fn within_window(&self, periods: &[ForecastPeriod]) -> Vec<ForecastSummary> {
        let horizon = self.clock.utc() + TimeDelta::hours(FORECAST_WINDOW_HOURS);
        periods
            .iter()
            .take_while(|period| period.start < horizon)
            .map(ForecastPeriod::summarise)
            .collect()
    }
}

#[async_trait]
impl<C, R, F> CityWeatherQuery for CityWeatherService<C, R, F>
where
    C: CityCache,
    R: CoordinateResolver,
    F: ForecastSource,
{
    async fn forecast(&self, cities: &[String]) -> Result<WeatherReport, WeatherQueryError> {
        if cities.first().is_none_or(|city| city.is_empty()) {
            return Err(WeatherQueryError::no_cities());
        }

        let mut report = WeatherReport::default();
        for city in cities {
            let forecasts = self.city_forecast(city).await?;
            report.cities.push(CityForecast {
                city: city.clone(),
                forecasts,
            });
        }
        Ok(report)
    }
}

#[cfg(test)]
#[path = "weather_service_tests.rs"]
mod tests;
