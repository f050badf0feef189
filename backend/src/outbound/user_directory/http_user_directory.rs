//! Reqwest-backed user directory adapter.
//!
//! Issues `GET {base}/users/{id}` against the user service. The response body
//! is never read; only the status matters. Each call is a single attempt
//! bounded by the client timeout.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::debug;

use crate::domain::ports::{UserDirectory, UserDirectoryError};

/// Timeout applied to every existence check unless configured otherwise.
pub const DEFAULT_USER_SERVICE_TIMEOUT: Duration = Duration::from_secs(3);

/// User directory that asks the user service over HTTP.
#[derive(Clone)]
pub struct HttpUserDirectory {
    client: Client,
    base_url: Url,
}

impl HttpUserDirectory {
    /// Build an adapter with an explicit request timeout.
    ///
    /// A trailing slash on `base_url` is tolerated.
    ///
    /// ```rust,ignore
    /// let directory = HttpUserDirectory::new(
    ///     Url::parse("http://user-service:8080")?,
    ///     DEFAULT_USER_SERVICE_TIMEOUT,
    /// )?;
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    fn user_url(&self, user_id: i64) -> Result<Url, UserDirectoryError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                UserDirectoryError::transport(format!(
                    "user service URL cannot be a base: {}",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(["users", &user_id.to_string()]);
        Ok(url)
    }
}

#[async_trait]
impl UserDirectory for HttpUserDirectory {
    async fn user_exists(&self, user_id: i64) -> Result<bool, UserDirectoryError> {
        let url = self.user_url(user_id)?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        debug!(user_id, status = status.as_u16(), "user service answered");
        map_status(status)
    }
}

fn map_transport_error(error: reqwest::Error) -> UserDirectoryError {
    if error.is_timeout() {
        UserDirectoryError::timeout(error.to_string())
    } else {
        UserDirectoryError::transport(error.to_string())
    }
}

fn map_status(status: StatusCode) -> Result<bool, UserDirectoryError> {
    match status {
        StatusCode::OK => Ok(true),
        StatusCode::NOT_FOUND => Ok(false),
        other => Err(UserDirectoryError::unexpected_status(other.as_u16())),
    }
}
