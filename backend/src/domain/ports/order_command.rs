//! Driving port for order mutations.

use async_trait::async_trait;

use crate::domain::{Error, Order};

/// Domain use-case port for creating orders.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderCommand: Send + Sync {
    /// Validate, check the referenced user and persist `order`.
    ///
    /// Returns the stored order carrying its assigned identity.
    async fn create_order(&self, order: Order) -> Result<Order, Error>;
}
