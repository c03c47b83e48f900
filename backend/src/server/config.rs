//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::time::Duration;

use weather_backend::config::WeatherSettings;

/// Resolved configuration for creating the HTTP server and its adapters.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) geocoding_url: String,
    pub(crate) forecast_url: String,
    pub(crate) user_agent: String,
    pub(crate) request_timeout: Duration,
    pub(crate) cache_max_age: Option<Duration>,
}

impl ServerConfig {
    /// Resolve layered settings into a server configuration.
    ///
    /// # Errors
    ///
    /// Returns [`std::io::ErrorKind::InvalidInput`] when the bind address does
    /// not parse.
    pub fn from_settings(settings: &WeatherSettings) -> std::io::Result<Self> {
        let bind_addr = settings.bind_addr().map_err(|error| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid bind address: {error}"),
            )
        })?;
        Ok(Self {
            bind_addr,
            geocoding_url: settings.geocoding_url().to_owned(),
            forecast_url: settings.forecast_url().to_owned(),
            user_agent: settings.user_agent().to_owned(),
            request_timeout: settings.request_timeout(),
            cache_max_age: settings.cache_max_age(),
        })
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
