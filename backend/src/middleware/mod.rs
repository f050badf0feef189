//! Request middleware.
//!
//! Purpose: cross-cutting request lifecycle concerns shared by both services.

pub mod telemetry;

pub use telemetry::RequestTelemetry;
