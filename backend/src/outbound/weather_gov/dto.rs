//! DTOs for decoding weather.gov lookup and forecast documents.
//!
//! Fields the service sometimes omits or sends as `null` decode to their
//! defaults, so only the forecast resource URL and period parsing decide
//! whether a document is usable.

use serde::Deserialize;

use super::parsing::{parse_timestamp, parse_wind_speed};
use crate::domain::ports::ForecastSourceError;
use crate::domain::{ForecastPeriod, Wind};

#[derive(Debug, Default, Deserialize)]
pub(super) struct PointsResponseDto {
    #[serde(default)]
    pub(super) properties: Option<PointsPropertiesDto>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct PointsPropertiesDto {
    #[serde(default)]
    pub(super) forecast: Option<String>,
}

impl PointsResponseDto {
    /// Forecast resource URL, if the lookup named a non-empty one.
    pub(super) fn forecast_url(self) -> Option<String> {
        self.properties
            .and_then(|properties| properties.forecast)
            .filter(|url| !url.is_empty())
    }
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct ForecastResponseDto {
    #[serde(default)]
    pub(super) properties: Option<ForecastPropertiesDto>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct ForecastPropertiesDto {
    #[serde(default)]
    pub(super) periods: Option<Vec<PeriodDto>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct PeriodDto {
    #[serde(default)]
    pub(super) start_time: Option<String>,
    #[serde(default)]
    pub(super) end_time: Option<String>,
    #[serde(default)]
    pub(super) is_daytime: Option<bool>,
    #[serde(default)]
    pub(super) temperature: Option<i32>,
    #[serde(default)]
    pub(super) wind_speed: Option<String>,
    #[serde(default)]
    pub(super) wind_direction: Option<String>,
    #[serde(default)]
    pub(super) short_forecast: Option<String>,
    #[serde(default)]
    pub(super) detailed_forecast: Option<String>,
}

impl ForecastResponseDto {
    /// Map every period in document order, failing on the first bad one.
    pub(super) fn into_domain_periods(self) -> Result<Vec<ForecastPeriod>, ForecastSourceError> {
        self.properties
            .and_then(|properties| properties.periods)
            .unwrap_or_default()
            .into_iter()
            .map(PeriodDto::into_domain_period)
            .collect()
    }
}

impl PeriodDto {
    fn into_domain_period(self) -> Result<ForecastPeriod, ForecastSourceError> {
        let start = parse_timestamp(self.start_time.as_deref().unwrap_or_default())
            .map_err(ForecastSourceError::bad_start_time)?;
        let end = parse_timestamp(self.end_time.as_deref().unwrap_or_default())
            .map_err(ForecastSourceError::bad_end_time)?;
        let (min_speed, max_speed) = parse_wind_speed(self.wind_speed.as_deref().unwrap_or_default())
            .map_err(ForecastSourceError::bad_wind_speed)?;

        Ok(ForecastPeriod {
            start,
            end,
            is_daytime: self.is_daytime.unwrap_or_default(),
            temperature_f: self.temperature.unwrap_or_default(),
            wind: Wind {
                min_speed,
                max_speed,
                direction: self.wind_direction.unwrap_or_default(),
            },
            short_description: self.short_forecast.unwrap_or_default(),
            long_description: self.detailed_forecast.unwrap_or_default(),
        })
    }
}
