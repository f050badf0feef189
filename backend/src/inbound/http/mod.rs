//! HTTP inbound adapter exposing REST endpoints.
//!
//! Each service mounts its resource routes ([`orders`] or [`users`]) next to
//! the shared operational routes ([`health`], [`metrics`], [`docs`]).

pub mod docs;
pub mod error;
pub mod health;
pub mod metrics;
pub mod orders;
pub mod state;
pub mod users;

pub use error::{ApiResult, ErrorBody};
