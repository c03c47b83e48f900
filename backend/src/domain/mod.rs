//! Domain primitives, services, and ports.
//!
//! Purpose: define the weather value types, the transport-agnostic error
//! payload, and the orchestration service that composes the driven ports.
//!
//! Public surface:
//! - Error / ErrorCode: failure payload handed to inbound adapters.
//! - Coordinate, ForecastPeriod, ForecastSummary, CityForecast,
//!   WeatherReport: forecast value types.
//! - CityWeatherService: implementation of the `CityWeatherQuery` port.
//! - TraceId: request-scoped correlation identifier.

pub mod error;
pub mod forecast;
pub mod ports;
pub mod trace_id;
pub mod weather_service;

pub use self::error::{Error, ErrorCode};
pub use self::forecast::{
    CityForecast, Coordinate, ForecastPeriod, ForecastSummary, WeatherReport, Wind,
};
pub use self::trace_id::TraceId;
pub use self::weather_service::{CityWeatherService, DEFAULT_COUNTRY, FORECAST_WINDOW_HOURS};

/// Header carrying the request trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";
