//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the order and user repository ports backed by
//! PostgreSQL through `diesel-async` and a `bb8` pool.
//!
//! - Repository implementations only translate between Diesel rows and
//!   domain types.
//! - Row structs (`models.rs`) and table definitions (`schema.rs`) stay
//!   internal to this module.
//! - Database errors are mapped to the port error types and never leak
//!   driver text.
//!
//! # Example
//!
//! ```ignore
//! use storefront::outbound::persistence::{DbPool, DieselOrderRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/orderdb")).await?;
//! let repo = DieselOrderRepository::new(pool);
//! ```

mod diesel_basic_error_mapping;
mod diesel_order_repository;
mod diesel_user_repository;
mod models;
mod pool;
mod schema;

pub use diesel_order_repository::DieselOrderRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
