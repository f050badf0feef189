//! Shared builders for the HTTP integration suites.

use std::sync::Arc;

use prometheus::Registry;
use storefront::domain::ports::UserDirectory;
use storefront::inbound::http::docs::ApiDocs;
use storefront::inbound::http::state::{OrderHttpState, UserHttpState};
use storefront::server::{OpsState, build_order_state, build_user_state};
use storefront::test_support::{InMemoryOrderRepository, InMemoryUserRepository};

/// Fresh metrics and docs for the order service.
pub fn order_ops() -> OpsState {
    OpsState::new(
        &Registry::new(),
        "order-service",
        ApiDocs::orders().expect("order docs render"),
    )
    .expect("metrics register")
}

/// Fresh metrics and docs for the user service.
pub fn user_ops() -> OpsState {
    OpsState::new(
        &Registry::new(),
        "user-service",
        ApiDocs::users().expect("user docs render"),
    )
    .expect("metrics register")
}

/// Order state over a shared in-memory repository and the given directory.
pub fn order_state<D>(repository: &Arc<InMemoryOrderRepository>, directory: D) -> OrderHttpState
where
    D: UserDirectory + 'static,
{
    build_order_state(Arc::clone(repository), Arc::new(directory))
}

/// User state over a shared in-memory repository.
pub fn user_state(repository: &Arc<InMemoryUserRepository>) -> UserHttpState {
    build_user_state(Arc::clone(repository))
}
