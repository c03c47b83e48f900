//! Geocoding adapter resolving city names through a Nominatim-style search API.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;
use url::form_urlencoded::byte_serialize;

use super::dto::first_coordinate;
use crate::domain::Coordinate;
use crate::domain::ports::{CoordinateResolver, CoordinateResolverError, HttpFetch};

/// Public Nominatim instance used when no endpoint is configured.
pub const DEFAULT_GEOCODING_URL: &str = "https://nominatim.openstreetmap.org";

/// Coordinate resolver backed by a geocoding search endpoint.
pub struct NominatimResolver {
    http: Arc<dyn HttpFetch>,
    base_url: String,
}

impl NominatimResolver {
    /// Build a resolver issuing requests against `base_url`.
    ///
    /// A trailing slash on `base_url` is ignored.
    pub fn new(http: Arc<dyn HttpFetch>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { http, base_url }
    }

    fn search_url(&self, city: &str, country: &str) -> String {
        format!(
            "{}/search?q={},{}&format=json",
            self.base_url,
            escape(city),
            escape(country)
        )
    }
}

fn escape(raw: &str) -> String {
    byte_serialize(raw.as_bytes()).collect()
}

#[async_trait]
impl CoordinateResolver for NominatimResolver {
    async fn find(
        &self,
        city: &str,
        country: &str,
    ) -> Result<Coordinate, CoordinateResolverError> {
        if city.is_empty() {
            return Err(CoordinateResolverError::empty_city());
        }
        if country.is_empty() {
            return Err(CoordinateResolverError::empty_country());
        }

        let url = self.search_url(city, country);
        let body = self
            .http
            .get(&url)
            .await
            .map_err(|error| CoordinateResolverError::transport(error.to_string()))?;
        let coordinate = first_coordinate(&body)?;
        debug!(%city, %country, latitude = coordinate.latitude, longitude = coordinate.longitude, "resolved city");
        Ok(coordinate)
    }
}

#[cfg(test)]
mod tests {
    //! Resolver behaviour against a mocked transport.

    use super::*;
    use crate::domain::ports::{HttpFetchError, MockHttpFetch};
    use mockall::predicate::eq;
    use rstest::rstest;

    const SPRINGFIELD: &str = r#"[{"lat": "39.7990175", "lon": "-89.6439575"}]"#;

    fn resolver(http: MockHttpFetch) -> NominatimResolver {
        NominatimResolver::new(Arc::new(http), "http://geo.test/")
    }

    #[rstest]
    #[case::empty_city("", "usa", CoordinateResolverError::EmptyCity)]
    #[case::empty_country("Springfield", "", CoordinateResolverError::EmptyCountry)]
    #[case::both_empty("", "", CoordinateResolverError::EmptyCity)]
    #[tokio::test]
    async fn empty_inputs_fail_without_network(
        #[case] city: &str,
        #[case] country: &str,
        #[case] expected: CoordinateResolverError,
    ) {
        let mut http = MockHttpFetch::new();
        http.expect_get().never();

        let result = resolver(http).find(city, country).await;

        assert_eq!(result, Err(expected));
    }

    #[tokio::test]
    async fn escapes_city_and_country_into_query() {
        let mut http = MockHttpFetch::new();
        http.expect_get()
            .with(eq("http://geo.test/search?q=St.+Louis%2FMO,usa&format=json"))
            .times(1)
            .returning(|_| Ok(SPRINGFIELD.to_owned()));

        let coordinate = resolver(http)
            .find("St. Louis/MO", "usa")
            .await
            .expect("resolves");

        assert_eq!(coordinate, Coordinate::new(39.799_017_5, -89.643_957_5));
    }

    #[tokio::test]
    async fn transport_failures_carry_detail() {
        let mut http = MockHttpFetch::new();
        http.expect_get()
            .times(1)
            .returning(|_| Err(HttpFetchError::transport("connection refused")));

        let result = resolver(http).find("Springfield", "usa").await;

        assert_eq!(
            result,
            Err(CoordinateResolverError::transport(
                "HTTP GET failed: connection refused"
            ))
        );
    }

    #[tokio::test]
    async fn empty_candidate_list_is_no_results() {
        let mut http = MockHttpFetch::new();
        http.expect_get()
            .times(1)
            .returning(|_| Ok("[]".to_owned()));

        let result = resolver(http).find("Nowhere", "usa").await;

        assert_eq!(result, Err(CoordinateResolverError::NoResults));
    }

    #[tokio::test]
    async fn malformed_body_is_parse_error() {
        let mut http = MockHttpFetch::new();
        http.expect_get()
            .times(1)
            .returning(|_| Ok("not json".to_owned()));

        let error = resolver(http)
            .find("Springfield", "usa")
            .await
            .expect_err("must fail");

        assert!(matches!(error, CoordinateResolverError::Parse { .. }));
        assert!(error.to_string().starts_with("Unmarshal error: "));
    }
}
