//! # mockservices-domain
//!
//! Pure domain model shared by the calculator, traffic and weather services.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamps, service identity
//! - Define **calculator** operands, operations and results
//! - Define the **route** lookup table and traffic reports
//! - Define the **city** lookup table and weather reports
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! Randomness and clocks are expressed as traits in the `app` crate (ports);
//! this crate only turns already-drawn values into reports.

pub mod error;
pub mod service;
pub mod time;

pub mod calculator;
pub mod traffic;
pub mod weather;
