//! # mockservices-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** the services are generic over:
//!   - `RandomSource` — uniform integer draws
//!   - `Clock` — current time
//! - Define the **use-case services**:
//!   - `CalculatorService` — the four arithmetic operations
//!   - `TrafficService` — per-route and all-route traffic reports
//!   - `WeatherService` — per-city reports and the city list
//! - Provide **in-process implementations** of the ports that need no IO
//!   (`ThreadRandom`, `SystemClock`) plus deterministic ones for tests
//!
//! ## Dependency rule
//! Depends on `mockservices-domain` only (plus `rand` for the default source).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod clock;
pub mod ports;
pub mod random;
pub mod services;
