//! Domain entities, errors, ports and use-case services.
//!
//! Purpose: hold the order and user rules independent of HTTP, SQL and the
//! network client. Adapters depend on this module; it depends on none of
//! them.
//!
//! Public surface:
//! - [`Error`] / [`ErrorCode`]: transport-agnostic failure categories.
//! - [`Order`] / [`User`]: entities exchanged with clients and storage.
//! - [`OrderService`] / [`UserService`]: implementations of the driving
//!   ports in [`ports`].

pub mod error;
mod order;
mod order_service;
pub mod ports;
mod user;
mod user_service;

pub use self::error::{Error, ErrorCode};
pub use self::order::{DEFAULT_ORDER_STATUS, Order};
pub use self::order_service::{INVALID_ORDER_MESSAGE, OrderService, USER_NOT_FOUND_MESSAGE};
pub use self::user::User;
pub use self::user_service::{INVALID_USER_MESSAGE, UserService};
