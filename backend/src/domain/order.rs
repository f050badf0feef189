//! Order data model.
//!
//! An order references a user by plain identifier; the reference is checked
//! against the user service at creation time and never enforced in-process.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Status assigned to an order when the caller does not supply one.
pub const DEFAULT_ORDER_STATUS: &str = "created";

/// Order entity exchanged with clients and persisted by the repository.
///
/// ## Invariants
/// - `id` is `0` until the repository assigns one on insert.
/// - `status` is never empty after a successful create.
///
/// Every field defaults when absent from a request body, so a missing
/// `user_id` or `amount` surfaces as a validation failure rather than a
/// decode failure.
///
/// # Examples
/// ```
/// use storefront::domain::Order;
///
/// let order: Order = serde_json::from_str(r#"{"user_id":1,"amount":50.0}"#)
///     .expect("valid order json");
/// assert_eq!(order.id, 0);
/// assert!(order.status.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Order {
    /// Storage-assigned identity.
    #[schema(example = 7)]
    pub id: i64,
    /// Identifier of the owning user in the user service.
    #[schema(example = 1)]
    pub user_id: i64,
    /// Order amount; must be strictly positive.
    #[schema(example = 50.0)]
    pub amount: f64,
    /// Short status tag.
    #[schema(example = "created")]
    pub status: String,
}

impl Order {
    /// Return whether the caller-supplied fields satisfy the creation rules.
    ///
    /// `NaN` amounts are rejected along with non-positive ones.
    pub fn is_valid(&self) -> bool {
        self.user_id > 0 && self.amount > 0.0
    }

    /// Fill in [`DEFAULT_ORDER_STATUS`] when no status was supplied.
    pub fn apply_default_status(&mut self) {
        if self.status.is_empty() {
            DEFAULT_ORDER_STATUS.clone_into(&mut self.status);
        }
    }
}
