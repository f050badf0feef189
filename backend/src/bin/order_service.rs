//! Order service entry point.

use std::io;
use std::sync::Arc;

use ortho_config::OrthoConfig;
use prometheus::Registry;
use tracing::info;

use storefront::config::OrderServiceSettings;
use storefront::inbound::http::docs::ApiDocs;
use storefront::outbound::persistence::{DbPool, DieselOrderRepository, PoolConfig};
use storefront::outbound::user_directory::HttpUserDirectory;
use storefront::server::{
    OpsState, ServerConfig, build_order_state, create_order_server, init_logging,
};

#[actix_web::main]
async fn main() -> io::Result<()> {
    let settings = OrderServiceSettings::load()
        .map_err(|err| io::Error::other(format!("failed to load settings: {err}")))?;
    init_logging(settings.log_level());

    let pool = DbPool::new(PoolConfig::new(settings.database_url()))
        .await
        .map_err(io::Error::other)?;
    let user_service_url = settings
        .user_service_url()
        .map_err(|err| io::Error::other(format!("invalid user service URL: {err}")))?;
    let directory = HttpUserDirectory::new(user_service_url, settings.user_service_timeout())
        .map_err(io::Error::other)?;

    let state = build_order_state(
        Arc::new(DieselOrderRepository::new(pool.clone())),
        Arc::new(directory),
    );
    let ops = OpsState::new(
        &Registry::new(),
        settings.service_name(),
        ApiDocs::orders().map_err(io::Error::other)?,
    )?;

    let config = ServerConfig::new(settings.bind_addr());
    info!(
        service = settings.service_name(),
        addr = %config.bind_addr(),
        "server starting"
    );
    create_order_server(config, state, ops)?.await?;

    drop(pool);
    info!(service = settings.service_name(), "server stopped");
    Ok(())
}
