//! Outbound adapters for the user directory port.

mod http_user_directory;

pub use http_user_directory::{DEFAULT_USER_SERVICE_TIMEOUT, HttpUserDirectory};
