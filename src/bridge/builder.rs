// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bridge builder.

use std::sync::Arc;

use crate::bridge::Bridge;
use crate::discovery::{self, DiscoveryOptions};
use crate::error::{Error, TransportError};
use crate::protocol::{HttpClient, HttpConfig, Transport};

/// Builder for a [`Bridge`] session.
///
/// # Examples
///
/// ```no_run
/// use hue_lights::Bridge;
/// use hue_lights::discovery::DiscoveryOptions;
/// use hue_lights::protocol::HttpConfig;
/// use std::time::Duration;
///
/// # async fn example() -> hue_lights::Result<()> {
/// // Known address: no network call
/// let bridge = Bridge::builder("my-credential")
///     .with_address("192.168.1.20")
///     .build()
///     .await?;
///
/// // Discovered address, custom timeout
/// let bridge = Bridge::builder("my-credential")
///     .with_http_config(HttpConfig::new().with_timeout(Duration::from_secs(3)))
///     .with_discovery(DiscoveryOptions::new())
///     .build()
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct BridgeBuilder {
    credential: String,
    address: Option<String>,
    discovery: DiscoveryOptions,
    http: HttpConfig,
}

impl BridgeBuilder {
    pub(crate) fn new(credential: impl Into<String>) -> Self {
        Self {
            credential: credential.into(),
            address: None,
            discovery: DiscoveryOptions::default(),
            http: HttpConfig::default(),
        }
    }

    /// Uses this bridge address instead of discovering one.
    ///
    /// An empty or blank address is treated as no address: the bridge is
    /// discovered. A bare host (`192.168.1.20`, `bridge.local:8080`) gets the configured
    /// scheme; an address with `http://` or `https://` is kept as is.
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Sets the discovery options used when no address is given.
    #[must_use]
    pub fn with_discovery(mut self, options: DiscoveryOptions) -> Self {
        self.discovery = options;
        self
    }

    /// Sets the HTTP configuration.
    #[must_use]
    pub fn with_http_config(mut self, config: HttpConfig) -> Self {
        self.http = config;
        self
    }

    /// Returns the explicit address, if any.
    #[must_use]
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// Builds the bridge over the default HTTP client.
    ///
    /// Queries the discovery service once if no address was given. The
    /// credential is not checked; an invalid one shows up on the first
    /// request.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The HTTP client cannot be created
    /// - Discovery fails, or discovers a blank address
    /// - The explicit address is reduced to nothing, e.g. `"/"`
    pub async fn build(self) -> Result<Bridge<HttpClient>, Error> {
        let client = self.http.clone().into_client()?;
        self.build_with_transport(client).await
    }

    /// Builds the bridge over a caller-provided transport.
    ///
    /// # Errors
    ///
    /// Same as [`build`](Self::build), minus client creation.
    pub async fn build_with_transport<T: Transport>(self, transport: T) -> Result<Bridge<T>, Error> {
        let address =
            discovery::resolve_address(&transport, self.address.as_deref(), &self.discovery)
                .await?;

        let address = address.trim().trim_end_matches('/').to_string();
        if address.is_empty() {
            return Err(TransportError::InvalidAddress("address is empty".to_string()).into());
        }

        let root = if address.starts_with("http://") || address.starts_with("https://") {
            address.clone()
        } else {
            format!("{}://{address}", self.http.scheme())
        };
        let base_url = format!("{root}/api/{}", urlencoding::encode(&self.credential));

        tracing::debug!(address = %address, "Bridge session ready");

        Ok(Bridge {
            credential: self.credential,
            address,
            base_url,
            transport: Arc::new(transport),
        })
    }
}
