//! Scoring engines and HTTP plumbing for the CanPath immigration calculators.
//!
//! The calculators themselves are pure functions over immutable value records;
//! everything stateful (configuration, telemetry, the axum surface) lives at
//! the edges and simply feeds them input.

pub mod calculators;
pub mod config;
pub mod error;
pub mod telemetry;
