//! Request telemetry middleware.
//!
//! Records one counter increment and one latency observation per request and
//! emits a structured `http_request` log event. The `path` label is the matched
//! route template (`/orders/{id}`), falling back to the raw path when no route
//! matched, so per-entity URLs do not explode label cardinality.
//!
//! The response passes through untouched.

use std::task::{Context, Poll};
use std::time::Instant;

use actix_web::Error;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::info;

use crate::outbound::metrics::HttpMetrics;

/// Middleware factory recording request metrics and access logs.
///
/// # Examples
/// ```ignore
/// use actix_web::App;
/// use prometheus::Registry;
/// use storefront::middleware::RequestTelemetry;
/// use storefront::outbound::metrics::HttpMetrics;
///
/// let metrics = HttpMetrics::new(&Registry::new(), "order-service")?;
/// let app = App::new().wrap(RequestTelemetry::new(metrics));
/// ```
#[derive(Clone)]
pub struct RequestTelemetry {
    metrics: HttpMetrics,
}

impl RequestTelemetry {
    /// Wrap the given metrics recorder.
    pub fn new(metrics: HttpMetrics) -> Self {
        Self { metrics }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequestTelemetry
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestTelemetryMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestTelemetryMiddleware {
            service,
            metrics: self.metrics.clone(),
        }))
    }
}

/// Service wrapper produced by [`RequestTelemetry`].
pub struct RequestTelemetryMiddleware<S> {
    service: S,
    metrics: HttpMetrics,
}

impl<S, B> Service<ServiceRequest> for RequestTelemetryMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let started = Instant::now();
        let method = req.method().to_string();
        let raw_path = req.path().to_owned();
        let metrics = self.metrics.clone();
        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;
            let (status, path) = match &result {
                Ok(res) => (
                    res.status().as_u16(),
                    res.request().match_pattern().unwrap_or(raw_path),
                ),
                Err(err) => (err.as_response_error().status_code().as_u16(), raw_path),
            };
            let elapsed = started.elapsed();

            metrics.observe(&method, &path, status, elapsed);
            info!(
                service = metrics.service(),
                method = %method,
                path = %path,
                status,
                duration_seconds = elapsed.as_secs_f64(),
                "http_request"
            );
            result
        })
    }
}
