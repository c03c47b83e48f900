//! End-to-end coverage for `GET /weather` using the real adapters against
//! fake geocoding and forecast upstreams.

use std::sync::Arc;
use std::time::Duration;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use chrono::{DateTime, Utc};
use mockable::DefaultClock;
use serde_json::{Value, json};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use weather_backend::Trace;
use weather_backend::domain::CityWeatherService;
use weather_backend::domain::ports::HttpFetch;
use weather_backend::inbound::http::state::HttpState;
use weather_backend::inbound::http::weather::get_weather;
use weather_backend::outbound::cache::InMemoryCityCache;
use weather_backend::outbound::geocoding::NominatimResolver;
use weather_backend::outbound::http::{DEFAULT_USER_AGENT, ReqwestFetch};
use weather_backend::outbound::weather_gov::WeatherGovSource;

fn state_for(upstream: &MockServer) -> web::Data<HttpState> {
    let fetch = ReqwestFetch::new(Duration::from_secs(5), DEFAULT_USER_AGENT)
        .expect("HTTP client builds");
    let http: Arc<dyn HttpFetch> = Arc::new(fetch);
    let service = CityWeatherService::new(
        Arc::new(InMemoryCityCache::new()),
        Arc::new(NominatimResolver::new(Arc::clone(&http), upstream.uri())),
        Arc::new(WeatherGovSource::new(http, upstream.uri())),
        Arc::new(DefaultClock),
    );
    web::Data::new(HttpState::new(Arc::new(service)))
}

/// Current UTC wall-clock time truncated to the seconds the parser keeps.
fn wall_clock_now() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%S").to_string()
}

async fn mount_city(
    upstream: &MockServer,
    city: &str,
    lat: &str,
    lon: &str,
    points_path: &str,
    grid: &str,
    detailed: &str,
) {
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", format!("{city},usa")))
        .and(query_param("format", "json"))
        .and(header("user-agent", DEFAULT_USER_AGENT))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{ "lat": lat, "lon": lon }])),
        )
        .expect(1)
        .mount(upstream)
        .await;

    let forecast_url = format!("{}/gridpoints/{grid}/forecast", upstream.uri());
    Mock::given(method("GET"))
        .and(path(points_path))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "properties": { "forecast": forecast_url } })),
        )
        .expect(1)
        .mount(upstream)
        .await;

    let now = wall_clock_now();
    Mock::given(method("GET"))
        .and(path(format!("/gridpoints/{grid}/forecast")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "properties": { "periods": [
                {
                    "startTime": format!("{now}-05:00"),
                    "endTime": format!("{now}-05:00"),
                    "isDaytime": true,
                    "temperature": 72,
                    "windSpeed": "4 to 8 mph",
                    "windDirection": "SW",
                    "shortForecast": "Sunny",
                    "detailedForecast": detailed
                },
                {
                    "startTime": "2999-01-01T06:00:00-05:00",
                    "endTime": "2999-01-01T18:00:00-05:00",
                    "isDaytime": true,
                    "temperature": 60,
                    "windSpeed": "5 mph",
                    "windDirection": "N",
                    "shortForecast": "Far future",
                    "detailedForecast": ""
                }
            ]}
        })))
        .expect(1)
        .mount(upstream)
        .await;
}

#[actix_web::test]
async fn single_city_returns_forecast_within_window() {
    let upstream = MockServer::start().await;
    mount_city(
        &upstream,
        "testcity",
        "39.7990175",
        "-89.6439575",
        "/points/39.79902,-89.64396",
        "ILX/50,60",
        "long dry spells",
    )
    .await;
    let app = test::init_service(
        App::new()
            .app_data(state_for(&upstream))
            .wrap(Trace)
            .service(get_weather),
    )
    .await;

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/weather?city=testcity")
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    let detail = &body["forecast"][0]["detail"];
    assert_eq!(body["forecast"][0]["name"], "testcity");
    assert_eq!(detail.as_array().map(Vec::len), Some(1));
    assert_eq!(detail[0]["description"], "long dry spells");
    let start: DateTime<Utc> = detail[0]["starttime"]
        .as_str()
        .expect("starttime is a string")
        .parse()
        .expect("starttime is RFC 3339");
    assert!(start <= Utc::now());
}

#[actix_web::test]
async fn two_cities_are_answered_in_order_then_cached() {
    let upstream = MockServer::start().await;
    mount_city(
        &upstream,
        "testcity",
        "39.7990175",
        "-89.6439575",
        "/points/39.79902,-89.64396",
        "ILX/50,60",
        "long dry spells",
    )
    .await;
    mount_city(
        &upstream,
        "testcity2",
        "42.3554334",
        "-71.060511",
        "/points/42.35543,-71.06051",
        "BOX/71,90",
        "",
    )
    .await;
    let app = test::init_service(
        App::new()
            .app_data(state_for(&upstream))
            .wrap(Trace)
            .service(get_weather),
    )
    .await;

    let mut bodies = Vec::new();
    for _ in 0..2 {
        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/weather?city=testcity,testcity2")
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = test::read_body_json(res).await;
        bodies.push(body);
    }

    let first = &bodies[0];
    assert_eq!(first["forecast"][0]["name"], "testcity");
    assert_eq!(first["forecast"][1]["name"], "testcity2");
    assert_eq!(
        first["forecast"][1]["detail"][0]["description"],
        "Sunny",
        "short forecast is used when the detailed one is empty"
    );
    assert_eq!(bodies[0], bodies[1], "second request is served from cache");
}

#[actix_web::test]
async fn unresolvable_city_fails_the_whole_request() {
    let upstream = MockServer::start().await;
    mount_city(
        &upstream,
        "testcity",
        "39.7990175",
        "-89.6439575",
        "/points/39.79902,-89.64396",
        "ILX/50,60",
        "long dry spells",
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "Atlantis,usa"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&upstream)
        .await;
    let app = test::init_service(
        App::new()
            .app_data(state_for(&upstream))
            .wrap(Trace)
            .service(get_weather),
    )
    .await;

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/weather?city=testcity,Atlantis")
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert!(res.headers().contains_key("trace-id"));
    let body = test::read_body(res).await;
    assert_eq!(
        std::str::from_utf8(&body).expect("utf8 body"),
        "Could not find co-ordinates for city: Atlantis"
    );
}

#[actix_web::test]
async fn upstream_error_status_is_a_forecast_failure() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{ "lat": "39.7990175", "lon": "-89.6439575" }])),
        )
        .mount(&upstream)
        .await;
    Mock::given(method("GET"))
        .and(path("/points/39.79902,-89.64396"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .expect(1)
        .mount(&upstream)
        .await;
    let app = test::init_service(
        App::new()
            .app_data(state_for(&upstream))
            .wrap(Trace)
            .service(get_weather),
    )
    .await;

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/weather?city=Springfield")
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = test::read_body(res).await;
    assert_eq!(
        std::str::from_utf8(&body).expect("utf8 body"),
        "Could not get a weather forecast for the city: Springfield"
    );
}

#[actix_web::test]
async fn missing_city_parameter_is_rejected_without_upstream_calls() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&upstream)
        .await;
    let app = test::init_service(
        App::new()
            .app_data(state_for(&upstream))
            .wrap(Trace)
            .service(get_weather),
    )
    .await;

    for uri in ["/weather", "/weather?city=", "/weather?city=,testcity"] {
        let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "{uri}");
        let body = test::read_body(res).await;
        assert_eq!(
            std::str::from_utf8(&body).expect("utf8 body"),
            "Please supply a comma delimited list of cities as the URL parameter 'city'"
        );
    }
}
