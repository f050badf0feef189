//! Outbound adapters for metrics exporting.
//!
//! Prometheus-backed request metrics shared by both services.

mod prometheus_http;

pub use prometheus_http::HttpMetrics;
