//! Traffic — the route lookup table and generated congestion reports.

use serde::{Deserialize, Serialize};

use crate::error::NotFoundError;
use crate::time::{Timestamp, unix_seconds};

/// Lowest speed a report can show, in mph.
pub const MIN_SPEED: i64 = 20;

/// Highest incident count a report can show.
pub const MAX_INCIDENTS: i64 = 3;

/// Static attributes of a known route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteRecord {
    /// Canonical route name, as reported back to callers.
    pub name: &'static str,
    pub lanes: i64,
    pub speed_limit: i64,
}

/// Every route the traffic service knows about.
pub static ROUTES: [RouteRecord; 4] = [
    RouteRecord {
        name: "I-95",
        lanes: 4,
        speed_limit: 65,
    },
    RouteRecord {
        name: "Route-66",
        lanes: 2,
        speed_limit: 55,
    },
    RouteRecord {
        name: "Highway-101",
        lanes: 6,
        speed_limit: 70,
    },
    RouteRecord {
        name: "I-405",
        lanes: 5,
        speed_limit: 65,
    },
];

/// Look up a route by name, ignoring ASCII case.
///
/// # Errors
///
/// Returns [`NotFoundError`] when no route matches.
pub fn find_route(name: &str) -> Result<&'static RouteRecord, NotFoundError> {
    ROUTES
        .iter()
        .find(|route| route.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| NotFoundError {
            entity: "Route",
            key: name.to_string(),
        })
}

/// Congestion level shown on a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Congestion {
    Light,
    Moderate,
    Heavy,
}

impl Congestion {
    /// Every level, lightest first.
    pub const ALL: [Self; 3] = [Self::Light, Self::Moderate, Self::Heavy];
}

/// Values drawn at random for one report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrafficSample {
    pub current_speed: i64,
    pub congestion: Congestion,
    pub incidents: i64,
}

/// Mock traffic conditions for one route at one moment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrafficReport {
    pub route: String,
    pub current_speed: i64,
    pub speed_limit: i64,
    pub lanes: i64,
    pub congestion: Congestion,
    pub incidents: i64,
    /// Seconds since the Unix epoch.
    pub timestamp: i64,
}

impl RouteRecord {
    /// Build a report for this route from a drawn sample.
    #[must_use]
    pub fn report(&self, sample: TrafficSample, at: Timestamp) -> TrafficReport {
        TrafficReport {
            route: self.name.to_string(),
            current_speed: sample.current_speed,
            speed_limit: self.speed_limit,
            lanes: self.lanes,
            congestion: sample.congestion,
            incidents: sample.incidents,
            timestamp: unix_seconds(at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn should_find_route_ignoring_case() {
        let route = find_route("i-95").unwrap();
        assert_eq!(route.name, "I-95");
        assert_eq!(route.lanes, 4);
        assert_eq!(route.speed_limit, 65);

        assert_eq!(find_route("ROUTE-66").unwrap().name, "Route-66");
        assert_eq!(find_route("highway-101").unwrap().name, "Highway-101");
    }

    #[test]
    fn should_return_not_found_for_unknown_route() {
        let err = find_route("unknown").unwrap_err();
        assert_eq!(err.to_string(), "Route not found");
        assert_eq!(err.key, "unknown");
    }

    #[test]
    fn should_keep_speed_limits_above_minimum_speed() {
        assert!(ROUTES.iter().all(|route| route.speed_limit >= MIN_SPEED));
    }

    #[test]
    fn should_copy_static_attributes_into_report() {
        let at = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let sample = TrafficSample {
            current_speed: 42,
            congestion: Congestion::Moderate,
            incidents: 1,
        };
        let report = ROUTES[2].report(sample, at);
        assert_eq!(report.route, "Highway-101");
        assert_eq!(report.lanes, 6);
        assert_eq!(report.speed_limit, 70);
        assert_eq!(report.current_speed, 42);
        assert_eq!(report.congestion, Congestion::Moderate);
        assert_eq!(report.incidents, 1);
        assert_eq!(report.timestamp, 1_700_000_000);
    }

    #[test]
    fn should_serialize_congestion_as_capitalized_name() {
        let json = serde_json::to_string(&Congestion::ALL).unwrap();
        assert_eq!(json, r#"["Light","Moderate","Heavy"]"#);
    }
}
