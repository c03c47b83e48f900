//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the weather and health endpoints together with the
//! response schemas. The document is served by Swagger UI in debug builds and
//! printed by the `openapi-dump` binary.

use utoipa::OpenApi;

use crate::inbound::http::weather::{CityForecastResponse, ForecastDetail, WeatherResponse};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Weather backend API",
        description = "48-hour forecasts for comma-delimited lists of US cities, plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::weather::get_weather,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(WeatherResponse, CityForecastResponse, ForecastDetail)),
    tags(
        (name = "weather", description = "City forecasts"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
