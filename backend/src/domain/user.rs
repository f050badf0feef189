//! User data model.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User entity exchanged with clients and persisted by the repository.
///
/// ## Invariants
/// - `id` is `0` until the repository assigns one on insert.
/// - Persisted users have a non-blank `name` and an `email` containing `@`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct User {
    /// Storage-assigned identity.
    #[schema(example = 1)]
    pub id: i64,
    /// Display name; stored as supplied.
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    /// Contact email.
    #[schema(example = "ada@example.com")]
    pub email: String,
}

impl User {
    /// Return whether the name and email pass the syntactic checks.
    ///
    /// # Examples
    /// ```
    /// use storefront::domain::User;
    ///
    /// let user = User { id: 0, name: "  ".into(), email: "bad".into() };
    /// assert!(!user.is_valid());
    /// ```
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && self.email.contains('@')
    }
}
