//! Shared application state for axum handlers.
//!
//! One state type per service. `Clone` is implemented manually on the generic
//! ones so the random source and clock do not need to be `Clone` — only the
//! `Arc` wrapper is cloned.

use std::sync::Arc;

use mockservices_app::ports::{Clock, RandomSource};
use mockservices_app::services::calculator_service::CalculatorService;
use mockservices_app::services::traffic_service::TrafficService;
use mockservices_app::services::weather_service::WeatherService;

/// State of the calculator router.
#[derive(Clone, Default)]
pub struct CalculatorState {
    pub calculator_service: Arc<CalculatorService>,
}

impl CalculatorState {
    #[must_use]
    pub fn new(calculator_service: CalculatorService) -> Self {
        Self {
            calculator_service: Arc::new(calculator_service),
        }
    }
}

/// State of the traffic router.
pub struct TrafficState<R, C> {
    pub traffic_service: Arc<TrafficService<R, C>>,
}

impl<R, C> Clone for TrafficState<R, C> {
    fn clone(&self) -> Self {
        Self {
            traffic_service: Arc::clone(&self.traffic_service),
        }
    }
}

impl<R, C> TrafficState<R, C>
where
    R: RandomSource + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
{
    pub fn new(traffic_service: TrafficService<R, C>) -> Self {
        Self {
            traffic_service: Arc::new(traffic_service),
        }
    }
}

/// State of the weather router.
pub struct WeatherState<R> {
    pub weather_service: Arc<WeatherService<R>>,
}

impl<R> Clone for WeatherState<R> {
    fn clone(&self) -> Self {
        Self {
            weather_service: Arc::clone(&self.weather_service),
        }
    }
}

impl<R> WeatherState<R>
where
    R: RandomSource + Send + Sync + 'static,
{
    pub fn new(weather_service: WeatherService<R>) -> Self {
        Self {
            weather_service: Arc::new(weather_service),
        }
    }
}
