//! PostgreSQL-backed `OrderRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::Order;
use crate::domain::ports::{OrderPersistenceError, OrderRepository};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{NewOrderRow, OrderRow};
use super::pool::{DbPool, PoolError};
use super::schema::orders;

/// Diesel-backed implementation of the order repository port.
#[derive(Clone)]
pub struct DieselOrderRepository {
    pool: DbPool,
}

impl DieselOrderRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> OrderPersistenceError {
    map_basic_pool_error(error, OrderPersistenceError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> OrderPersistenceError {
    map_basic_diesel_error(
        error,
        OrderPersistenceError::query,
        OrderPersistenceError::connection,
    )
}

#[async_trait]
impl OrderRepository for DieselOrderRepository {
    async fn create(&self, order: &Order) -> Result<i64, OrderPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::insert_into(orders::table)
            .values(NewOrderRow::from(order))
            .returning(orders::id)
            .get_result::<i64>(&mut conn)
            .await
            .map_err(map_diesel_error)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, OrderPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = orders::table
            .filter(orders::id.eq(id))
            .select(OrderRow::as_select())
            .first::<OrderRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Order::from))
    }
}
