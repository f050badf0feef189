//! Port abstraction for user persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::User;

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user and return the identity assigned by storage.
    async fn create(&self, user: &User) -> Result<i64, UserPersistenceError>;

    /// Fetch a user by identifier; a missing row yields `Ok(None)`.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, UserPersistenceError>;
}
