//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{OrderCommand, OrderQuery, UserCommand, UserQuery};

/// Dependency bundle for the order handlers.
#[derive(Clone)]
pub struct OrderHttpState {
    pub orders: Arc<dyn OrderCommand>,
    pub orders_query: Arc<dyn OrderQuery>,
}

impl OrderHttpState {
    /// Construct state from the order driving ports.
    ///
    /// A single service usually implements both ports, so the same `Arc` is
    /// commonly passed twice.
    pub fn new(orders: Arc<dyn OrderCommand>, orders_query: Arc<dyn OrderQuery>) -> Self {
        Self {
            orders,
            orders_query,
        }
    }
}

/// Dependency bundle for the user handlers.
#[derive(Clone)]
pub struct UserHttpState {
    pub users: Arc<dyn UserCommand>,
    pub users_query: Arc<dyn UserQuery>,
}

impl UserHttpState {
    /// Construct state from the user driving ports.
    pub fn new(users: Arc<dyn UserCommand>, users_query: Arc<dyn UserQuery>) -> Self {
        Self { users, users_query }
    }
}
