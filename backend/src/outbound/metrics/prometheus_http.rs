//! Prometheus adapter for per-request HTTP metrics.
//!
//! Metrics are registered with a provided registry and exposed in the text
//! exposition format via the `/metrics` endpoint.

use std::time::Duration;

use prometheus::{CounterVec, Encoder, HistogramOpts, HistogramVec, Opts, Registry, TextEncoder};

const LABELS: [&str; 4] = ["service", "method", "path", "status"];

/// Prometheus-backed HTTP request recorder.
///
/// # Metrics
///
/// - `http_requests_total` (counter)
/// - `http_request_duration_seconds` (histogram, default buckets)
///
/// Both carry the labels `service`, `method`, `path` and `status`. `path` is
/// the matched route template when one is known.
#[derive(Clone)]
pub struct HttpMetrics {
    registry: Registry,
    service: String,
    requests_total: CounterVec,
    request_duration: HistogramVec,
}

impl HttpMetrics {
    /// Create and register metrics with the given registry.
    ///
    /// # Errors
    ///
    /// Returns an error if a metric cannot be registered (e.g., if a metric
    /// with the same name already exists in the registry).
    pub fn new(registry: &Registry, service: impl Into<String>) -> Result<Self, prometheus::Error> {
        let requests_total = CounterVec::new(
            Opts::new("http_requests_total", "Total number of HTTP requests"),
            &LABELS,
        )?;
        let request_duration = HistogramVec::new(
            HistogramOpts::new(
                "http_request_duration_seconds",
                "HTTP request latency in seconds",
            ),
            &LABELS,
        )?;
        registry.register(Box::new(requests_total.clone()))?;
        registry.register(Box::new(request_duration.clone()))?;

        Ok(Self {
            registry: registry.clone(),
            service: service.into(),
            requests_total,
            request_duration,
        })
    }

    /// Name used for the `service` label.
    pub fn service(&self) -> &str {
        &self.service
    }

    /// Record one completed request.
    pub fn observe(&self, method: &str, path: &str, status: u16, elapsed: Duration) {
        let status = status.to_string();
        let labels = [self.service.as_str(), method, path, status.as_str()];
        self.requests_total.with_label_values(&labels).inc();
        self.request_duration
            .with_label_values(&labels)
            .observe(elapsed.as_secs_f64());
    }

    /// Render every metric in the registry in the text exposition format.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails.
    pub fn render(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|err| prometheus::Error::Msg(err.to_string()))
    }
}
