//! Forecast source adapter for the weather.gov two-hop API.
//!
//! The adapter first resolves a coordinate to a forecast resource via the
//! `points` endpoint, then dereferences that resource and maps its periods.

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::dto::{ForecastResponseDto, PointsResponseDto};
use crate::domain::ports::{ForecastSource, ForecastSourceError, HttpFetch};
use crate::domain::{Coordinate, ForecastPeriod};

/// Public weather.gov API root used when no endpoint is configured.
pub const DEFAULT_FORECAST_URL: &str = "https://api.weather.gov";

/// Forecast source backed by the weather.gov API.
pub struct WeatherGovSource {
    http: Arc<dyn HttpFetch>,
    base_url: String,
}

impl WeatherGovSource {
    /// Build a source issuing lookups against `base_url`.
    ///
    /// A trailing slash on `base_url` is ignored.
    pub fn new(http: Arc<dyn HttpFetch>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { http, base_url }
    }

    fn points_url(&self, position: Coordinate) -> String {
        format!(
            "{}/points/{:.5},{:.5}",
            self.base_url, position.latitude, position.longitude
        )
    }

    async fn forecast_resource(&self, position: Coordinate) -> Result<String, ForecastSourceError> {
        let body = self
            .http
            .get(&self.points_url(position))
            .await
            .map_err(|error| {
                ForecastSourceError::transport(format!(
                    "Error fetching weather report via GET: {error}"
                ))
            })?;
        let lookup: PointsResponseDto = decode(&body, "the co-ordinate weather lookup")?;
        lookup
            .forecast_url()
            .ok_or_else(ForecastSourceError::missing_forecast_resource)
    }
}

fn decode<T: DeserializeOwned>(body: &str, what: &str) -> Result<T, ForecastSourceError> {
    serde_json::from_str(body).map_err(|error| {
        ForecastSourceError::parse(format!("Error unmarshalling {what}: {error}"))
    })
}

#[async_trait]
impl ForecastSource for WeatherGovSource {
    async fn fetch(&self, position: Coordinate) -> Result<Vec<ForecastPeriod>, ForecastSourceError> {
        let resource = self.forecast_resource(position).await?;
        debug!(%resource, "following forecast resource");

        let body = self.http.get(&resource).await.map_err(|error| {
            ForecastSourceError::transport(format!("Error fetching forecast via GET: {error}"))
        })?;
        let forecast: ForecastResponseDto = decode(&body, "the forecast")?;
        forecast.into_domain_periods()
    }
}
