//! Builders wiring outbound adapters into the HTTP state.

use std::sync::Arc;

use actix_web::web;
use chrono::TimeDelta;
use mockable::DefaultClock;
use tracing::info;

use weather_backend::domain::CityWeatherService;
use weather_backend::domain::ports::HttpFetch;
use weather_backend::inbound::http::state::HttpState;
use weather_backend::outbound::cache::InMemoryCityCache;
use weather_backend::outbound::geocoding::NominatimResolver;
use weather_backend::outbound::http::ReqwestFetch;
use weather_backend::outbound::weather_gov::WeatherGovSource;

use super::ServerConfig;

fn build_cache(config: &ServerConfig) -> std::io::Result<InMemoryCityCache> {
    match config.cache_max_age {
        Some(max_age) => {
            let max_age = TimeDelta::from_std(max_age).map_err(|error| {
                std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("cache max age out of range: {error}"),
                )
            })?;
            info!(max_age_secs = max_age.num_seconds(), "forecast cache entries expire");
            Ok(InMemoryCityCache::with_max_age(max_age, Arc::new(DefaultClock)))
        }
        None => Ok(InMemoryCityCache::new()),
    }
}

/// Build the HTTP state from the real upstream adapters.
///
/// # Errors
///
/// Returns an error when the HTTP client cannot be constructed or the cache
/// age does not fit a timestamp delta.
pub(crate) fn build_http_state(config: &ServerConfig) -> std::io::Result<web::Data<HttpState>> {
    let fetch = ReqwestFetch::new(config.request_timeout, &config.user_agent)
        .map_err(|error| std::io::Error::other(format!("HTTP client setup failed: {error}")))?;
    let http: Arc<dyn HttpFetch> = Arc::new(fetch);

    let service = CityWeatherService::new(
        Arc::new(build_cache(config)?),
        Arc::new(NominatimResolver::new(
            Arc::clone(&http),
            config.geocoding_url.as_str(),
        )),
        Arc::new(WeatherGovSource::new(http, config.forecast_url.as_str())),
        Arc::new(DefaultClock),
    );

    Ok(web::Data::new(HttpState::new(Arc::new(service))))
}
