//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on the driving port and stay testable without network access.

use std::sync::Arc;

use crate::domain::ports::CityWeatherQuery;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub weather: Arc<dyn CityWeatherQuery>,
}

impl HttpState {
    /// Construct state from the weather query port.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use weather_backend::domain::ports::FixtureCityWeatherQuery;
    /// use weather_backend::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(Arc::new(FixtureCityWeatherQuery));
    /// let _weather = state.weather.clone();
    /// ```
    pub fn new(weather: Arc<dyn CityWeatherQuery>) -> Self {
        Self { weather }
    }
}
