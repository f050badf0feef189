//! User domain service.
//!
//! Implements the user driving ports: validate then persist on create,
//! validate the identifier then delegate on reads.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{UserCommand, UserPersistenceError, UserQuery, UserRepository};
use crate::domain::{Error, User};

/// Message returned when user fields fail validation.
pub const INVALID_USER_MESSAGE: &str = "invalid user input";

fn map_repository_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => {
            Error::storage(format!("user repository unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            Error::storage(format!("user repository error: {message}"))
        }
    }
}

/// User service implementing the user command and query ports.
#[derive(Clone)]
pub struct UserService<R> {
    user_repo: Arc<R>,
}

impl<R> UserService<R> {
    /// Create a new service backed by the user repository.
    pub fn new(user_repo: Arc<R>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl<R> UserCommand for UserService<R>
where
    R: UserRepository,
{
    async fn create_user(&self, mut user: User) -> Result<User, Error> {
        if !user.is_valid() {
            debug!("rejected invalid user");
            return Err(Error::invalid_input(INVALID_USER_MESSAGE));
        }

        user.id = self
            .user_repo
            .create(&user)
            .await
            .map_err(map_repository_error)?;
        Ok(user)
    }
}

#[async_trait]
impl<R> UserQuery for UserService<R>
where
    R: UserRepository,
{
    async fn find_user(&self, id: i64) -> Result<Option<User>, Error> {
        if id <= 0 {
            return Err(Error::invalid_input(INVALID_USER_MESSAGE));
        }
        self.user_repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "user_service_tests.rs"]
mod tests;
