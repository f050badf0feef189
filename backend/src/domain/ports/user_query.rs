//! Driving port for user reads.
//!
//! The order service's existence check lands on the HTTP adapter backed by
//! this port, so a `None` here is what ultimately becomes "user not found"
//! on the other side.

use async_trait::async_trait;

use crate::domain::{Error, User};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserQuery: Send + Sync {
    /// Fetch one user; `Ok(None)` when no user has this identifier.
    async fn find_user(&self, id: i64) -> Result<Option<User>, Error>;
}
