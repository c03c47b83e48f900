//! Forecast adapter for the US National Weather Service API.

mod dto;
mod parsing;
mod source;

pub use source::{DEFAULT_FORECAST_URL, WeatherGovSource};
