//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::time::Duration;

const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_CLIENT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Builder-style configuration for creating the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) shutdown_timeout: Duration,
    pub(crate) client_request_timeout: Duration,
}

impl ServerConfig {
    /// Construct a configuration with a 10 second graceful shutdown window
    /// and a 5 second limit for receiving request headers.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            shutdown_timeout: DEFAULT_SHUTDOWN_TIMEOUT,
            client_request_timeout: DEFAULT_CLIENT_REQUEST_TIMEOUT,
        }
    }

    /// Override how long in-flight requests may run once shutdown starts.
    #[must_use]
    pub fn with_shutdown_timeout(mut self, timeout: Duration) -> Self {
        self.shutdown_timeout = timeout;
        self
    }

    /// Override the request header timeout.
    #[must_use]
    pub fn with_client_request_timeout(mut self, timeout: Duration) -> Self {
        self.client_request_timeout = timeout;
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
