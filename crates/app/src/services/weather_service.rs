//! Weather service — randomized conditions for known cities.

use mockservices_domain::error::MockServiceError;
use mockservices_domain::weather::{self, TEMP_VARIATION, WeatherReport};

use crate::ports::RandomSource;

/// Application service generating weather reports.
pub struct WeatherService<R> {
    random: R,
}

impl<R: RandomSource> WeatherService<R> {
    /// Create a new service drawing temperature offsets from `random`.
    pub fn new(random: R) -> Self {
        Self { random }
    }

    /// Report the weather for `city` (any case), with a fresh temperature
    /// offset in `-TEMP_VARIATION..=TEMP_VARIATION`.
    ///
    /// # Errors
    ///
    /// Returns [`MockServiceError::NotFound`] when the city is unknown.
    #[tracing::instrument(skip(self))]
    pub fn city_report(&self, city: &str) -> Result<WeatherReport, MockServiceError> {
        let record = weather::find_city(city).inspect_err(|_| {
            tracing::debug!("unknown city requested");
        })?;
        let offset = self.random.int_inclusive(-TEMP_VARIATION, TEMP_VARIATION);
        Ok(record.report(offset))
    }

    /// Lookup keys of every known city.
    #[must_use]
    pub fn list_cities(&self) -> Vec<&'static str> {
        weather::city_keys().collect()
    }
}
