//! Backend entry-point: loads configuration, wires adapters, and serves HTTP.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{error, warn};
use tracing_subscriber::{EnvFilter, fmt};

use weather_backend::config::WeatherSettings;
use weather_backend::inbound::http::health::HealthState;

use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = WeatherSettings::load_from_iter(std::env::args_os()).map_err(|e| {
        error!(error = %e, "configuration load failed");
        std::io::Error::other(format!("configuration load failed: {e}"))
    })?;
    let config = ServerConfig::from_settings(&settings)?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    let result = server.await;
    health_state.mark_unhealthy();
    result
}
