//! Order domain service.
//!
//! Implements the order driving ports. Creation runs in a fixed order:
//! validate, ask the user service whether the user exists, default the
//! status, then persist. No order is written for a user the directory has
//! not confirmed, and an invalid request is rejected before any default is
//! applied.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::ports::{
    OrderCommand, OrderPersistenceError, OrderQuery, OrderRepository, UserDirectory,
    UserDirectoryError,
};
use crate::domain::{Error, Order};

/// Message returned when order fields fail validation.
pub const INVALID_ORDER_MESSAGE: &str = "invalid order input";
/// Message returned when the referenced user does not exist.
pub const USER_NOT_FOUND_MESSAGE: &str = "user not found";

fn map_repository_error(error: OrderPersistenceError) -> Error {
    match error {
        OrderPersistenceError::Connection { message } => {
            Error::storage(format!("order repository unavailable: {message}"))
        }
        OrderPersistenceError::Query { message } => {
            Error::storage(format!("order repository error: {message}"))
        }
    }
}

fn map_directory_error(error: UserDirectoryError) -> Error {
    Error::dependency_unavailable(error.to_string())
}

/// Order service implementing the order command and query ports.
#[derive(Clone)]
pub struct OrderService<R, D> {
    order_repo: Arc<R>,
    user_directory: Arc<D>,
}

impl<R, D> OrderService<R, D> {
    /// Create a new service from its repository and user directory.
    pub fn new(order_repo: Arc<R>, user_directory: Arc<D>) -> Self {
        Self {
            order_repo,
            user_directory,
        }
    }
}

#[async_trait]
impl<R, D> OrderCommand for OrderService<R, D>
where
    R: OrderRepository,
    D: UserDirectory,
{
    async fn create_order(&self, mut order: Order) -> Result<Order, Error> {
        if !order.is_valid() {
            debug!(user_id = order.user_id, "rejected invalid order");
            return Err(Error::invalid_input(INVALID_ORDER_MESSAGE));
        }

        let exists = self
            .user_directory
            .user_exists(order.user_id)
            .await
            .map_err(|err| {
                warn!(user_id = order.user_id, error = %err, "user existence check failed");
                map_directory_error(err)
            })?;
        if !exists {
            debug!(user_id = order.user_id, "order references unknown user");
            return Err(Error::referenced_entity_missing(USER_NOT_FOUND_MESSAGE));
        }

        order.apply_default_status();
        order.id = self
            .order_repo
            .create(&order)
            .await
            .map_err(map_repository_error)?;
        Ok(order)
    }
}

#[async_trait]
impl<R, D> OrderQuery for OrderService<R, D>
where
    R: OrderRepository,
    D: UserDirectory,
{
    async fn find_order(&self, id: i64) -> Result<Option<Order>, Error> {
        if id <= 0 {
            return Err(Error::invalid_input(INVALID_ORDER_MESSAGE));
        }
        self.order_repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "order_service_tests.rs"]
mod tests;
