//! Builders wiring adapters into services and HTTP state.

use std::sync::Arc;

use prometheus::Registry;

use crate::domain::ports::{OrderRepository, UserDirectory, UserRepository};
use crate::domain::{OrderService, UserService};
use crate::inbound::http::docs::ApiDocs;
use crate::inbound::http::state::{OrderHttpState, UserHttpState};
use crate::outbound::metrics::HttpMetrics;

/// Build order handler state from a repository and a user directory.
///
/// One [`OrderService`] backs both the command and query ports.
pub fn build_order_state<R, D>(repository: Arc<R>, directory: Arc<D>) -> OrderHttpState
where
    R: OrderRepository + 'static,
    D: UserDirectory + 'static,
{
    let service = Arc::new(OrderService::new(repository, directory));
    OrderHttpState::new(service.clone(), service)
}

/// Build user handler state from a repository.
pub fn build_user_state<R>(repository: Arc<R>) -> UserHttpState
where
    R: UserRepository + 'static,
{
    let service = Arc::new(UserService::new(repository));
    UserHttpState::new(service.clone(), service)
}

/// Operational dependencies shared by every route: metrics and API docs.
#[derive(Clone)]
pub struct OpsState {
    pub(crate) metrics: HttpMetrics,
    pub(crate) docs: ApiDocs,
}

impl OpsState {
    /// Register request metrics for `service_name` on `registry`.
    ///
    /// # Errors
    ///
    /// Returns [`std::io::Error`] if metric registration fails.
    pub fn new(registry: &Registry, service_name: &str, docs: ApiDocs) -> std::io::Result<Self> {
        let metrics = HttpMetrics::new(registry, service_name).map_err(|e| {
            std::io::Error::other(format!("request metrics registration failed: {e}"))
        })?;
        Ok(Self { metrics, docs })
    }

    /// Request metrics recorder.
    pub fn metrics(&self) -> &HttpMetrics {
        &self.metrics
    }
}
