//! Driven port for checking that a user exists in the user service.
//!
//! The order workflow only needs a yes/no answer; transport concerns stay in
//! the outbound adapter. "Absent" is a successful `false`, never an error, so
//! the domain can tell a missing user apart from an unreachable service.

use async_trait::async_trait;

use super::define_port_error;

define_port_error! {
    /// Errors surfaced while asking the user service about a user.
    pub enum UserDirectoryError {
        /// Network transport failed before a response arrived.
        Transport { message: String } => "user service transport failed: {message}",
        /// The call exceeded the client timeout.
        Timeout { message: String } => "user service timed out: {message}",
        /// The user service answered with a status other than 200 or 404.
        UnexpectedStatus { status: u16 } => "unexpected status from user service: {status}",
    }
}

/// Port for existence checks against the user service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Return whether a user with `user_id` exists.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use storefront::domain::ports::{FixtureUserDirectory, UserDirectory};
    ///
    /// let directory = FixtureUserDirectory::with_users([1, 2]);
    /// assert!(directory.user_exists(1).await?);
    /// assert!(!directory.user_exists(99).await?);
    /// # Ok::<(), storefront::domain::ports::UserDirectoryError>(())
    /// ```
    async fn user_exists(&self, user_id: i64) -> Result<bool, UserDirectoryError>;
}

/// Fixture directory answering from a fixed set of identifiers.
#[derive(Debug, Clone, Default)]
pub struct FixtureUserDirectory {
    known: std::collections::BTreeSet<i64>,
}

impl FixtureUserDirectory {
    /// Build a directory that reports exactly `ids` as existing.
    pub fn with_users(ids: impl IntoIterator<Item = i64>) -> Self {
        Self {
            known: ids.into_iter().collect(),
        }
    }
}

#[async_trait]
impl UserDirectory for FixtureUserDirectory {
    async fn user_exists(&self, user_id: i64) -> Result<bool, UserDirectoryError> {
        Ok(self.known.contains(&user_id))
    }
}
