//! Driven port caching filtered forecasts per city.
//!
//! A miss is an expected signal, so lookups return `Option` rather than an
//! error. Stores overwrite the whole entry.
use async_trait::async_trait;

use crate::domain::ForecastSummary;

/// Port storing the last computed forecast list for each city.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CityCache: Send + Sync {
    /// Return the cached forecasts for `city`, if any.
    async fn get(&self, city: &str) -> Option<Vec<ForecastSummary>>;

    /// Replace the cached forecasts for `city`.
    async fn store(&self, city: &str, forecasts: Vec<ForecastSummary>);
}
