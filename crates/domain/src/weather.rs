//! Weather — the city lookup table and perturbed weather reports.

use serde::{Deserialize, Serialize};

use crate::error::NotFoundError;

/// Maximum absolute temperature offset applied to a report.
pub const TEMP_VARIATION: i64 = 5;

/// Static conditions of a known city.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CityRecord {
    /// Lowercase lookup key.
    pub key: &'static str,
    pub temp: i64,
    pub condition: &'static str,
    pub humidity: i64,
}

/// Every city the weather service knows about.
pub static CITIES: [CityRecord; 4] = [
    CityRecord {
        key: "newyork",
        temp: 72,
        condition: "Sunny",
        humidity: 65,
    },
    CityRecord {
        key: "london",
        temp: 59,
        condition: "Cloudy",
        humidity: 80,
    },
    CityRecord {
        key: "tokyo",
        temp: 68,
        condition: "Rainy",
        humidity: 75,
    },
    CityRecord {
        key: "sydney",
        temp: 77,
        condition: "Partly Cloudy",
        humidity: 70,
    },
];

/// Look up a city after lowercasing the requested name.
///
/// # Errors
///
/// Returns [`NotFoundError`] when no city matches.
pub fn find_city(name: &str) -> Result<&'static CityRecord, NotFoundError> {
    let key = name.to_lowercase();
    CITIES
        .iter()
        .find(|city| city.key == key)
        .ok_or_else(|| NotFoundError {
            entity: "City",
            key: name.to_string(),
        })
}

/// Lookup keys of every known city, in table order.
pub fn city_keys() -> impl Iterator<Item = &'static str> {
    CITIES.iter().map(|city| city.key)
}

/// Mock conditions returned for one city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub temp: i64,
    pub condition: String,
    pub humidity: i64,
}

impl CityRecord {
    /// Copy this record with the temperature shifted by `offset`.
    #[must_use]
    pub fn report(&self, offset: i64) -> WeatherReport {
        WeatherReport {
            temp: self.temp + offset,
            condition: self.condition.to_string(),
            humidity: self.humidity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_find_city_ignoring_case() {
        assert_eq!(find_city("NewYork").unwrap().key, "newyork");
        assert_eq!(find_city("LONDON").unwrap().condition, "Cloudy");
    }

    #[test]
    fn should_return_not_found_for_unknown_city() {
        let err = find_city("Atlantis").unwrap_err();
        assert_eq!(err.to_string(), "City not found");
    }

    #[test]
    fn should_list_all_city_keys() {
        let keys: Vec<_> = city_keys().collect();
        assert_eq!(keys, ["newyork", "london", "tokyo", "sydney"]);
    }

    #[test]
    fn should_only_perturb_temperature() {
        let report = CITIES[3].report(-5);
        assert_eq!(
            report,
            WeatherReport {
                temp: 72,
                condition: "Partly Cloudy".to_string(),
                humidity: 70,
            }
        );
    }
}
