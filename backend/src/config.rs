//! Service configuration loaded via OrthoConfig.
//!
//! Values are layered from CLI flags, `WEATHER_*` environment variables and
//! configuration files. The bind address and timeout carry OrthoConfig
//! defaults; the remaining optional fields fall back in their accessors.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::geocoding::DEFAULT_GEOCODING_URL;
use crate::outbound::http::DEFAULT_USER_AGENT;
use crate::outbound::weather_gov::DEFAULT_FORECAST_URL;

/// Configuration values for the weather service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "WEATHER")]
pub struct WeatherSettings {
    /// Socket address the HTTP server binds to.
    #[ortho_config(default = "0.0.0.0:8080".to_owned())]
    pub bind_addr: String,
    /// Base URL of the geocoding search service.
    pub geocoding_url: Option<String>,
    /// Base URL of the forecast service.
    pub forecast_url: Option<String>,
    /// User agent sent with upstream requests.
    pub user_agent: Option<String>,
    /// Upstream request timeout in seconds.
    #[ortho_config(default = 30)]
    pub request_timeout_secs: u64,
    /// Maximum age of a cached forecast in seconds. Unset means no expiry.
    pub cache_max_age_secs: Option<u64>,
}

impl WeatherSettings {
    /// Parse the bind address.
    ///
    /// # Errors
    ///
    /// Returns an error when the configured address does not parse.
    pub fn bind_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        self.bind_addr.parse()
    }

    /// Return the geocoding base URL, falling back to the default.
    pub fn geocoding_url(&self) -> &str {
        self.geocoding_url
            .as_deref()
            .unwrap_or(DEFAULT_GEOCODING_URL)
    }

    /// Return the forecast base URL, falling back to the default.
    pub fn forecast_url(&self) -> &str {
        self.forecast_url.as_deref().unwrap_or(DEFAULT_FORECAST_URL)
    }

    /// Return the upstream user agent, falling back to the default.
    pub fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }

    /// Return the upstream request timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Return the cache entry age limit, if one is configured.
    pub fn cache_max_age(&self) -> Option<Duration> {
        self.cache_max_age_secs.map(Duration::from_secs)
    }
}
