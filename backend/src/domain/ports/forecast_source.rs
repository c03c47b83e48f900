//! Driven port fetching the ordered forecast periods for a coordinate.
use async_trait::async_trait;

use super::define_port_error;
use crate::domain::{Coordinate, ForecastPeriod};

define_port_error! {
    /// Errors surfaced while fetching or decoding a forecast.
    pub enum ForecastSourceError {
        /// A GET against the lookup or forecast endpoint failed.
        Transport { message: String } => "{message}",
        /// A lookup or forecast document was not the expected JSON.
        Parse { message: String } => "{message}",
        /// The coordinate lookup did not name a forecast resource.
        MissingForecastResource =>
            "Error finding the forecast resource from the co-ordinate weather lookup",
        /// A period start time could not be parsed.
        BadStartTime { message: String } =>
            "Error converting start time to a timestamp: {message}",
        /// A period end time could not be parsed.
        BadEndTime { message: String } =>
            "Error converting end time to a timestamp: {message}",
        /// A period wind speed did not match a recognised shape.
        BadWindSpeed { message: String } =>
            "Error converting wind speed measures to integers: {message}",
    }
}

/// Port producing forecast periods in upstream order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ForecastSource: Send + Sync {
    /// Fetch every period for `position`; the first malformed period fails
    /// the whole call.
    async fn fetch(&self, position: Coordinate) -> Result<Vec<ForecastPeriod>, ForecastSourceError>;
}
