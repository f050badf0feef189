//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`, [`UserDirectory`]) are implemented by
//! outbound adapters and expose strongly typed errors. Driving ports
//! (`*Command`, `*Query`) are implemented by the domain services and consumed
//! by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod order_command;
mod order_query;
mod order_repository;
mod user_command;
mod user_directory;
mod user_query;
mod user_repository;

#[cfg(test)]
pub use order_command::MockOrderCommand;
pub use order_command::OrderCommand;
#[cfg(test)]
pub use order_query::MockOrderQuery;
pub use order_query::OrderQuery;
#[cfg(test)]
pub use order_repository::MockOrderRepository;
pub use order_repository::{OrderPersistenceError, OrderRepository};
#[cfg(test)]
pub use user_command::MockUserCommand;
pub use user_command::UserCommand;
#[cfg(test)]
pub use user_directory::MockUserDirectory;
pub use user_directory::{FixtureUserDirectory, UserDirectory, UserDirectoryError};
#[cfg(test)]
pub use user_query::MockUserQuery;
pub use user_query::UserQuery;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
