//! Traffic service — randomized congestion reports for known routes.

use mockservices_domain::error::MockServiceError;
use mockservices_domain::traffic::{
    self, Congestion, MAX_INCIDENTS, MIN_SPEED, ROUTES, RouteRecord, TrafficReport, TrafficSample,
};

use crate::ports::{Clock, RandomSource};

/// Application service generating traffic reports.
///
/// Every report is drawn fresh; nothing is cached between calls.
pub struct TrafficService<R, C> {
    random: R,
    clock: C,
}

impl<R: RandomSource, C: Clock> TrafficService<R, C> {
    /// Create a new service drawing from `random` and stamping with `clock`.
    pub fn new(random: R, clock: C) -> Self {
        Self { random, clock }
    }

    /// Generate a report for the route named `name` (any case).
    ///
    /// # Errors
    ///
    /// Returns [`MockServiceError::NotFound`] when the route is unknown.
    #[tracing::instrument(skip(self))]
    pub fn route_report(&self, name: &str) -> Result<TrafficReport, MockServiceError> {
        let route = traffic::find_route(name).inspect_err(|_| {
            tracing::debug!("unknown route requested");
        })?;
        Ok(self.generate(route))
    }

    /// Generate an independent report for every known route, in table order.
    #[tracing::instrument(skip(self))]
    pub fn all_reports(&self) -> Vec<TrafficReport> {
        ROUTES.iter().map(|route| self.generate(route)).collect()
    }

    fn generate(&self, route: &RouteRecord) -> TrafficReport {
        let sample = TrafficSample {
            current_speed: self.random.int_inclusive(MIN_SPEED, route.speed_limit),
            congestion: Congestion::ALL[self.random.index(Congestion::ALL.len())],
            incidents: self.random.int_inclusive(0, MAX_INCIDENTS),
        };
        let report = route.report(sample, self.clock.now());
        tracing::trace!(?report, "generated traffic report");
        report
    }
}
