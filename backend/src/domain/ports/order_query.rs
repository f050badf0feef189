//! Driving port for order reads.

use async_trait::async_trait;

use crate::domain::{Error, Order};

/// Domain use-case port for fetching orders.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderQuery: Send + Sync {
    /// Fetch one order; `Ok(None)` when no order has this identifier.
    async fn find_order(&self, id: i64) -> Result<Option<Order>, Error>;
}
