//! Order and user HTTP services.
//!
//! The crate is organised as a hexagon: [`domain`] holds entities, errors,
//! ports and use-case services; [`outbound`] implements the driven ports
//! (PostgreSQL, the user service client, Prometheus); [`inbound`] exposes the
//! driving ports over HTTP; [`server`] wires everything for the
//! `order-service` and `user-service` binaries.

pub mod config;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use middleware::RequestTelemetry;
