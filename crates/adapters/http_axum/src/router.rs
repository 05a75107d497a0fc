//! Axum router assembly, one router per service.
//!
//! Every router answers `/health` and replies in JSON to unknown paths (404)
//! and unsupported methods (405). A [`TraceLayer`] logs each HTTP
//! request/response at the `DEBUG` level using the `tracing` ecosystem.

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use mockservices_app::ports::{Clock, RandomSource};
use mockservices_domain::service::ServiceKind;

use crate::api::{calculator, health, traffic, weather};
use crate::error::{method_not_allowed, not_found};
use crate::state::{CalculatorState, TrafficState, WeatherState};

/// Build the calculator [`Router`].
pub fn calculator(state: CalculatorState) -> Router {
    Router::new()
        .route("/health", health::route(ServiceKind::Calculator))
        .route("/add", post(calculator::add))
        .route("/subtract", post(calculator::subtract))
        .route("/multiply", post(calculator::multiply))
        .route("/divide", post(calculator::divide))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Build the traffic [`Router`].
pub fn traffic<R, C>(state: TrafficState<R, C>) -> Router
where
    R: RandomSource + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route("/health", health::route(ServiceKind::Traffic))
        .route("/traffic", get(traffic::list::<R, C>))
        .route("/traffic/{route}", get(traffic::get::<R, C>))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Build the weather [`Router`].
pub fn weather<R>(state: WeatherState<R>) -> Router
where
    R: RandomSource + Send + Sync + 'static,
{
    Router::new()
        .route("/health", health::route(ServiceKind::Weather))
        .route("/weather", get(weather::list::<R>))
        .route("/weather/{city}", get(weather::get::<R>))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
