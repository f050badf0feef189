//! User service entry point.

use std::io;
use std::sync::Arc;

use ortho_config::OrthoConfig;
use prometheus::Registry;
use tracing::info;

use storefront::config::UserServiceSettings;
use storefront::inbound::http::docs::ApiDocs;
use storefront::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
use storefront::server::{
    OpsState, ServerConfig, build_user_state, create_user_server, init_logging,
};

#[actix_web::main]
async fn main() -> io::Result<()> {
    let settings = UserServiceSettings::load()
        .map_err(|err| io::Error::other(format!("failed to load settings: {err}")))?;
    init_logging(settings.log_level());

    let pool = DbPool::new(PoolConfig::new(settings.database_url()))
        .await
        .map_err(io::Error::other)?;

    let state = build_user_state(Arc::new(DieselUserRepository::new(pool.clone())));
    let ops = OpsState::new(
        &Registry::new(),
        settings.service_name(),
        ApiDocs::users().map_err(io::Error::other)?,
    )?;

    let config = ServerConfig::new(settings.bind_addr());
    info!(
        service = settings.service_name(),
        addr = %config.bind_addr(),
        "server starting"
    );
    create_user_server(config, state, ops)?.await?;

    drop(pool);
    info!(service = settings.service_name(), "server stopped");
    Ok(())
}
