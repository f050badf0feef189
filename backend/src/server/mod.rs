//! Server construction and middleware wiring shared by both binaries.

mod config;
mod logging;
mod state_builders;

pub use config::ServerConfig;
pub use logging::{env_filter, init_logging};
pub use state_builders::{OpsState, build_order_state, build_user_state};

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use crate::inbound::http::error::configure_extractors;
use crate::inbound::http::state::{OrderHttpState, UserHttpState};
use crate::inbound::http::{docs, health, metrics, orders, users};
use crate::middleware::RequestTelemetry;

fn ops_routes(cfg: &mut web::ServiceConfig) {
    health::configure(cfg);
    docs::configure(cfg);
    cfg.service(metrics::scrape_metrics);
}

fn base_app(
    ops: OpsState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let OpsState { metrics, docs } = ops;
    App::new()
        .wrap(RequestTelemetry::new(metrics.clone()))
        .app_data(web::Data::new(metrics))
        .app_data(web::Data::new(docs))
        .configure(configure_extractors)
        .configure(ops_routes)
}

/// Build the order service application.
///
/// # Examples
/// ```ignore
/// use actix_web::test;
/// use storefront::server::{OpsState, build_order_state, order_app};
///
/// let app = test::init_service(order_app(state, ops)).await;
/// ```
pub fn order_app(
    state: OrderHttpState,
    ops: OpsState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    base_app(ops)
        .app_data(web::Data::new(state))
        .configure(orders::configure)
}

/// Build the user service application.
pub fn user_app(
    state: UserHttpState,
    ops: OpsState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    base_app(ops)
        .app_data(web::Data::new(state))
        .configure(users::configure)
}

/// Construct the order service HTTP server.
///
/// # Returns
/// A [`Server`] that must be awaited to drive the listener. It stops on
/// SIGINT/SIGTERM after letting in-flight requests finish within the
/// configured shutdown window.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_order_server(
    config: ServerConfig,
    state: OrderHttpState,
    ops: OpsState,
) -> std::io::Result<Server> {
    let ServerConfig {
        bind_addr,
        shutdown_timeout,
        client_request_timeout,
    } = config;

    let server = HttpServer::new(move || order_app(state.clone(), ops.clone()))
        .bind(bind_addr)?
        .shutdown_timeout(shutdown_timeout.as_secs())
        .client_request_timeout(client_request_timeout)
        .run();
    Ok(server)
}

/// Construct the user service HTTP server.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_user_server(
    config: ServerConfig,
    state: UserHttpState,
    ops: OpsState,
) -> std::io::Result<Server> {
    let ServerConfig {
        bind_addr,
        shutdown_timeout,
        client_request_timeout,
    } = config;

    let server = HttpServer::new(move || user_app(state.clone(), ops.clone()))
        .bind(bind_addr)?
        .shutdown_timeout(shutdown_timeout.as_secs())
        .client_request_timeout(client_request_timeout)
        .run();
    Ok(server)
}
