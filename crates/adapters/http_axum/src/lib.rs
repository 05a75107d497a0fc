//! # mockservices-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve one **JSON API per service**: calculator, traffic and weather each
//!   get their own [`Router`](axum::Router), meant to run in its own process
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and domain errors into JSON responses with the
//!   matching status code
//!
//! ## Dependency rule
//! Depends on `mockservices-app` (for port traits and services) and
//! `mockservices-domain` (for the types serialized on the wire). Never leaks
//! axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
