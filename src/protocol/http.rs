// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `reqwest`-backed HTTP transport.

use std::time::Duration;

use reqwest::{Client, Method};
use serde_json::Value;

use crate::error::TransportError;
use crate::protocol::{BridgeResponse, Transport};

/// Connection settings shared by the bridge and its lights.
///
/// # Examples
///
/// ```
/// use hue_lights::protocol::HttpConfig;
/// use std::time::Duration;
///
/// let config = HttpConfig::new()
///     .with_https()
///     .with_timeout(Duration::from_secs(5));
///
/// assert_eq!(config.scheme(), "https");
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    use_https: bool,
    timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpConfig {
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a configuration with plain HTTP and the default timeout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            use_https: false,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Talks to the bridge over HTTPS instead of HTTP.
    #[must_use]
    pub fn with_https(mut self) -> Self {
        self.use_https = true;
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns whether HTTPS is enabled.
    #[must_use]
    pub fn use_https(&self) -> bool {
        self.use_https
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the URL scheme used for bridge requests.
    #[must_use]
    pub fn scheme(&self) -> &'static str {
        if self.use_https { "https" } else { "http" }
    }

    /// Creates an `HttpClient` from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn into_client(self) -> Result<HttpClient, TransportError> {
        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(TransportError::Http)?;

        Ok(HttpClient { client })
    }
}

/// HTTP client issuing JSON requests against absolute URLs.
///
/// Cloning is cheap; clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a client with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn new() -> Result<Self, TransportError> {
        HttpConfig::new().into_client()
    }
}

impl Transport for HttpClient {
    async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<&Value>,
    ) -> Result<BridgeResponse, TransportError> {
        tracing::debug!(method = %method, url = %url, "Sending HTTP request");

        let mut request = self.client.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(TransportError::Http)?;
        let status = response.status();

        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response.text().await.map_err(TransportError::Http)?;

        tracing::debug!(status = status.as_u16(), len = body.len(), "Received HTTP response");

        Ok(BridgeResponse::new(status.as_u16(), body))
    }
}
