//! Health endpoints: liveness and readiness probes for orchestration and load
//! balancers.
//!
//! Both probes answer 200 with an empty body whenever the process is serving;
//! neither touches the database or the user service.

use actix_web::{HttpResponse, get, http::header, web};

fn probe_response() -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .finish()
}

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/healthz",
    tags = ["health"],
    responses((status = 200, description = "Process is alive"))
)]
#[get("/healthz")]
pub async fn healthz() -> HttpResponse {
    probe_response()
}

/// Readiness probe.
#[utoipa::path(
    get,
    path = "/readyz",
    tags = ["health"],
    responses((status = 200, description = "Server accepts traffic"))
)]
#[get("/readyz")]
pub async fn readyz() -> HttpResponse {
    probe_response()
}

/// Register both probes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(healthz).service(readyz);
}
