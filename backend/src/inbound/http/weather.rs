//! Multi-city forecast endpoint.
//!
//! ```text
//! GET /weather?city=Springfield,Boston
//! ```

use actix_web::{HttpRequest, get, web};
use chrono::{DateTime, Utc};
use serde::Serialize;
use url::form_urlencoded;
use utoipa::{IntoParams, ToSchema};

use crate::domain::{CityForecast, ForecastSummary, WeatherReport};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Query parameters accepted by [`get_weather`].
#[derive(Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct WeatherParams {
    /// Comma-delimited city names, resolved in order.
    #[param(example = "Springfield,Boston")]
    pub city: Option<String>,
}

impl WeatherParams {
    /// Read the parameters from a raw query string.
    ///
    /// A repeated `city` key keeps its first value.
    pub fn from_query(query: &str) -> Self {
        let city = form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == "city")
            .map(|(_, value)| value.into_owned());
        Self { city }
    }

    /// Split the `city` parameter on commas without trimming.
    ///
    /// An absent parameter behaves like an empty one.
    pub fn cities(&self) -> Vec<String> {
        self.city
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::to_owned)
            .collect()
    }
}

/// One forecast period in the response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ForecastDetail {
    #[schema(value_type = String, example = "2020-01-01T12:00:00Z")]
    pub starttime: DateTime<Utc>,
    #[schema(value_type = String, example = "2020-01-01T18:00:00Z")]
    pub endtime: DateTime<Utc>,
    #[schema(example = "long dry spells")]
    pub description: String,
}

/// Forecast periods for one requested city.
#[derive(Debug, Serialize, ToSchema)]
pub struct CityForecastResponse {
    #[schema(example = "Springfield")]
    pub name: String,
    pub detail: Vec<ForecastDetail>,
}

/// Response payload for [`get_weather`].
#[derive(Debug, Serialize, ToSchema)]
pub struct WeatherResponse {
    pub forecast: Vec<CityForecastResponse>,
}

impl From<ForecastSummary> for ForecastDetail {
    fn from(summary: ForecastSummary) -> Self {
        Self {
            starttime: summary.start,
            endtime: summary.end,
            description: summary.description,
        }
    }
}

impl From<CityForecast> for CityForecastResponse {
    fn from(city: CityForecast) -> Self {
        Self {
            name: city.city,
            detail: city.forecasts.into_iter().map(ForecastDetail::from).collect(),
        }
    }
}

impl From<WeatherReport> for WeatherResponse {
    fn from(report: WeatherReport) -> Self {
        Self {
            forecast: report
                .cities
                .into_iter()
                .map(CityForecastResponse::from)
                .collect(),
        }
    }
}

/// Forecast the next 48 hours for each requested city.
#[utoipa::path(
    get,
    path = "/weather",
    description = "Return forecasts starting within the next 48 hours for a comma-delimited list of US cities. Any city that cannot be resolved or forecast fails the whole request.",
    params(WeatherParams),
    responses(
        (status = 200, description = "Forecasts in request order", body = WeatherResponse),
        (status = 400, description = "No cities supplied, or a city could not be resolved or forecast", body = String, content_type = "text/plain")
    ),
    tags = ["weather"],
    operation_id = "getWeather"
)]
#[get("/weather")]
pub async fn get_weather(
    state: web::Data<HttpState>,
    req: HttpRequest,
) -> ApiResult<web::Json<WeatherResponse>> {
    let params = WeatherParams::from_query(req.query_string());
    let report = state.weather.forecast(&params.cities()).await?;
    Ok(web::Json(WeatherResponse::from(report)))
}
