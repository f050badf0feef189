//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::User;
use crate::domain::ports::{UserPersistenceError, UserRepository};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{NewUserRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed implementation of the user repository port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> UserPersistenceError {
    map_basic_pool_error(error, UserPersistenceError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> UserPersistenceError {
    map_basic_diesel_error(
        error,
        UserPersistenceError::query,
        UserPersistenceError::connection,
    )
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn create(&self, user: &User) -> Result<i64, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::insert_into(users::table)
            .values(NewUserRow::from(user))
            .returning(users::id)
            .get_result::<i64>(&mut conn)
            .await
            .map_err(map_diesel_error)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = users::table
            .filter(users::id.eq(id))
            .select(UserRow::as_select())
            .first::<UserRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(User::from))
    }
}
