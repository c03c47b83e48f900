//! In-process cache adapter for filtered city forecasts.
//!
//! Entries live in a `RwLock<HashMap>`: lookups share the read lock, stores
//! take the write lock and replace the whole entry, so readers never observe
//! a partially written forecast list.
//!
//! Entries never expire unless a maximum age is configured. With a maximum
//! age, an entry older than the limit reads as a miss and stays in place
//! until the next store for that city overwrites it.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use mockable::{Clock, DefaultClock};
use tracing::debug;

use crate::domain::ForecastSummary;
use crate::domain::ports::CityCache;

#[derive(Debug, Clone)]
struct CachedCityForecast {
    forecasts: Vec<ForecastSummary>,
    stored_at: DateTime<Utc>,
}

/// City cache held in process memory for the lifetime of the server.
pub struct InMemoryCityCache {
    entries: RwLock<HashMap<String, CachedCityForecast>>,
    clock: Arc<dyn Clock>,
    max_age: Option<TimeDelta>,
}

impl Default for InMemoryCityCache {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryCityCache {
    /// Create a cache whose entries never expire.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            clock: Arc::new(DefaultClock),
            max_age: None,
        }
    }

    /// Create a cache treating entries older than `max_age` as misses.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use chrono::TimeDelta;
    /// use mockable::DefaultClock;
    /// use weather_backend::outbound::cache::InMemoryCityCache;
    ///
    /// let cache = InMemoryCityCache::with_max_age(TimeDelta::minutes(30), Arc::new(DefaultClock));
    /// # let _ = cache;
    /// ```
    pub fn with_max_age(max_age: TimeDelta, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            clock,
            max_age: Some(max_age),
        }
    }

    fn is_fresh(&self, entry: &CachedCityForecast) -> bool {
        match self.max_age {
            Some(max_age) => self.clock.utc() - entry.stored_at <= max_age,
            None => true,
        }
    }
}

#[async_trait]
impl CityCache for InMemoryCityCache {
    async fn get(&self, city: &str) -> Option<Vec<ForecastSummary>> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        let entry = entries.get(city)?;
        if !self.is_fresh(entry) {
            debug!(%city, "cached forecast expired");
            return None;
        }
        Some(entry.forecasts.clone())
    }

    async fn store(&self, city: &str, forecasts: Vec<ForecastSummary>) {
        let entry = CachedCityForecast {
            forecasts,
            stored_at: self.clock.utc(),
        };
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.insert(city.to_owned(), entry);
    }
}
