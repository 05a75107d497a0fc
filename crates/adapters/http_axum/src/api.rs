//! JSON API handler modules, one per service plus the shared health check.

#[allow(clippy::missing_errors_doc)]
pub mod calculator;
pub mod health;
#[allow(clippy::missing_errors_doc)]
pub mod traffic;
#[allow(clippy::missing_errors_doc)]
pub mod weather;
