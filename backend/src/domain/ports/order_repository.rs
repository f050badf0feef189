//! Port abstraction for order persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::Order;

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by order repository adapters.
    pub enum OrderPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "order repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "order repository query failed: {message}",
    }
}

/// Storage for orders. Identity assignment belongs to the repository.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Insert a new order and return the identity assigned by storage.
    ///
    /// The `id` carried by `order` is ignored.
    async fn create(&self, order: &Order) -> Result<i64, OrderPersistenceError>;

    /// Fetch an order by identifier; a missing row yields `Ok(None)`.
    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, OrderPersistenceError>;
}
