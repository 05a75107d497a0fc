//! # mockservicesd — mock service daemons
//!
//! Composition root shared by the `calculatord`, `trafficd` and `weatherd`
//! binaries.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars) per service
//! - Initialize `tracing` from the configured filter
//! - Construct application services, injecting the thread-local random
//!   source and the system clock via port traits
//! - Build the service's axum router
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

pub mod config;
pub mod server;
pub mod telemetry;

use axum::Router;
use mockservices_adapter_http_axum::router;
use mockservices_adapter_http_axum::state::{CalculatorState, TrafficState, WeatherState};
use mockservices_app::clock::SystemClock;
use mockservices_app::random::ThreadRandom;
use mockservices_app::services::calculator_service::CalculatorService;
use mockservices_app::services::traffic_service::TrafficService;
use mockservices_app::services::weather_service::WeatherService;
use mockservices_domain::service::ServiceKind;

use crate::config::{Config, ConfigError};
use crate::server::ServeError;
use crate::telemetry::TelemetryError;

/// Errors that stop a daemon.
#[derive(Debug, thiserror::Error)]
pub enum DaemonError {
    #[error("configuration error")]
    Config(#[from] ConfigError),
    #[error("logging setup failed")]
    Telemetry(#[from] TelemetryError),
    #[error("server error")]
    Serve(#[from] ServeError),
}

/// Build the production router for `service`.
#[must_use]
pub fn app(service: ServiceKind) -> Router {
    match service {
        ServiceKind::Calculator => {
            router::calculator(CalculatorState::new(CalculatorService::new()))
        }
        ServiceKind::Traffic => {
            let traffic_service = TrafficService::new(ThreadRandom, SystemClock);
            router::traffic(TrafficState::new(traffic_service))
        }
        ServiceKind::Weather => {
            let weather_service = WeatherService::new(ThreadRandom);
            router::weather(WeatherState::new(weather_service))
        }
    }
}

/// Load configuration, set up logging and serve `service` until shutdown.
///
/// # Errors
///
/// Returns a [`DaemonError`] if configuration is invalid, logging cannot be
/// initialised, or the listener fails.
pub async fn run(service: ServiceKind) -> Result<(), DaemonError> {
    let config = Config::load(service)?;
    telemetry::init(&config.logging)?;
    tracing::info!(%service, "starting");

    server::serve(&config, app(service)).await?;
    Ok(())
}
