//! Prometheus scrape endpoint.

use actix_web::{HttpResponse, get, web};
use prometheus::{Encoder, TextEncoder};
use tracing::error;

use crate::outbound::metrics::HttpMetrics;

/// Expose every registered metric in the Prometheus text format.
#[utoipa::path(
    get,
    path = "/metrics",
    tags = ["observability"],
    responses(
        (status = 200, description = "Prometheus text exposition", body = String, content_type = "text/plain"),
        (status = 500, description = "Metrics could not be encoded")
    )
)]
#[get("/metrics")]
pub async fn scrape_metrics(recorder: web::Data<HttpMetrics>) -> HttpResponse {
    match recorder.render() {
        Ok(body) => HttpResponse::Ok()
            .content_type(TextEncoder::new().format_type())
            .body(body),
        Err(err) => {
            error!(error = %err, "failed to encode metrics");
            HttpResponse::InternalServerError().finish()
        }
    }
}
