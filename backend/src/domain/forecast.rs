//! Weather value types shared by the orchestrator and its adapters.
//!
//! All timestamps are `DateTime<Utc>`. Upstream forecast times are parsed from
//! their local wall-clock text with the offset discarded, so a value here is
//! the upstream wall-clock reading labelled as UTC.

use chrono::{DateTime, Utc};

/// Latitude/longitude pair identifying a location for weather lookup.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinate {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

impl Coordinate {
    /// Build a coordinate from raw degrees.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Wind speed range and direction for one forecast period.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Wind {
    /// Lower bound of the forecast wind speed.
    pub min_speed: i32,
    /// Upper bound of the forecast wind speed; equals `min_speed` for
    /// single-value forecasts.
    pub max_speed: i32,
    /// Compass direction as reported upstream (`NW`, `SSE`, ...).
    pub direction: String,
}

/// One discrete forecast window ("Tonight", "Tuesday").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastPeriod {
    /// Period start.
    pub start: DateTime<Utc>,
    /// Period end.
    pub end: DateTime<Utc>,
    /// Whether the period covers daytime hours.
    pub is_daytime: bool,
    /// Temperature in degrees Fahrenheit.
    pub temperature_f: i32,
    /// Wind forecast.
    pub wind: Wind,
    /// Terse forecast text.
    pub short_description: String,
    /// Detailed forecast text, possibly empty.
    pub long_description: String,
}

impl ForecastPeriod {
    /// Text describing the period: the detailed forecast when present,
    /// otherwise the short one.
    ///
    /// # Examples
    /// ```
    /// use chrono::Utc;
    /// use weather_backend::domain::{ForecastPeriod, Wind};
    ///
    /// let now = Utc::now();
    /// let period = ForecastPeriod {
    ///     start: now,
    ///     end: now,
    ///     is_daytime: true,
    ///     temperature_f: 70,
    ///     wind: Wind::default(),
    ///     short_description: "Sunny".to_owned(),
    ///     long_description: String::new(),
    /// };
    /// assert_eq!(period.description(), "Sunny");
    /// ```
    pub fn description(&self) -> &str {
        if self.long_description.is_empty() {
            self.short_description.as_str()
        } else {
            self.long_description.as_str()
        }
    }

    /// Reduce the period to the fields kept in cached and returned results.
    pub fn summarise(&self) -> ForecastSummary {
        ForecastSummary {
            start: self.start,
            end: self.end,
            description: self.description().to_owned(),
        }
    }
}

/// Cached, user-facing view of a forecast period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastSummary {
    /// Period start.
    pub start: DateTime<Utc>,
    /// Period end.
    pub end: DateTime<Utc>,
    /// Resolved description text.
    pub description: String,
}

/// Forecast list for one requested city.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityForecast {
    /// City name exactly as requested.
    pub city: String,
    /// Periods inside the forecast window, in upstream order.
    pub forecasts: Vec<ForecastSummary>,
}

/// Aggregate answer for a multi-city request, in request order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WeatherReport {
    /// One entry per requested city.
    pub cities: Vec<CityForecast>,
}
