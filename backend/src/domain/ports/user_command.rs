//! Driving port for user mutations.

use async_trait::async_trait;

use crate::domain::{Error, User};

/// Domain use-case port for registering users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserCommand: Send + Sync {
    /// Validate and persist `user`, returning it with its assigned identity.
    async fn create_user(&self, user: User) -> Result<User, Error>;
}
