//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed repositories using Diesel ORM
//! - **user_directory**: HTTP client for user existence checks
//! - **metrics**: Prometheus-backed request metrics
//!
//! Adapters are thin translators that convert between domain types and
//! infrastructure-specific representations. They contain no business logic.

pub mod metrics;
pub mod persistence;
pub mod user_directory;
