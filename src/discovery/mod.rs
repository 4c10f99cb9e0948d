// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bridge address discovery.
//!
//! A bridge address is either given explicitly or looked up through the
//! public discovery service, which answers with the bridges registered from
//! the caller's public IP:
//!
//! ```json
//! [{"id": "001788fffe100491", "internalipaddress": "192.168.1.20", "port": 443}]
//! ```
//!
//! The service URL is plain configuration ([`DiscoveryOptions::with_url`]);
//! tests and private deployments point it elsewhere.
//!
//! # Examples
//!
//! ```no_run
//! use hue_lights::discovery::{discover_bridges, DiscoveryOptions};
//! use hue_lights::protocol::HttpClient;
//!
//! # async fn example() -> hue_lights::Result<()> {
//! let client = HttpClient::new()?;
//! let bridges = discover_bridges(&client, &DiscoveryOptions::new()).await?;
//!
//! for bridge in &bridges {
//!     println!("{} at {}", bridge.id, bridge.internal_ip_address);
//! }
//! # Ok(())
//! # }
//! ```

use serde::Deserialize;
use serde_json::Value;

use crate::error::DiscoveryError;
use crate::protocol::Transport;

/// Public discovery service used when no address is given.
pub const DEFAULT_DISCOVERY_URL: &str = "https://discovery.meethue.com";

/// Field of a discovery entry holding the bridge's LAN address.
const ADDRESS_FIELD: &str = "internalipaddress";

/// Options for bridge discovery.
#[derive(Debug, Clone, Default)]
pub struct DiscoveryOptions {
    url: Option<String>,
}

impl DiscoveryOptions {
    /// Creates options pointing at [`DEFAULT_DISCOVERY_URL`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the discovery service URL.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Returns the discovery service URL.
    #[must_use]
    pub fn url(&self) -> &str {
        self.url.as_deref().unwrap_or(DEFAULT_DISCOVERY_URL)
    }
}

/// A bridge announced by the discovery service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DiscoveredBridge {
    /// Bridge identifier, derived from its MAC address.
    #[serde(default)]
    pub id: String,
    /// Address of the bridge on the local network.
    #[serde(rename = "internalipaddress")]
    pub internal_ip_address: String,
    /// Port the bridge listens on, when announced.
    #[serde(default)]
    pub port: Option<u16>,
}

/// Returns every bridge announced by the discovery service, in response order.
///
/// # Errors
///
/// - `DiscoveryError::Request` if the request fails or is not 2xx
/// - `DiscoveryError::NoBridges` if the service knows no bridge
/// - `DiscoveryError::Malformed` if an entry lacks `internalipaddress`
pub async fn discover_bridges<T: Transport>(
    transport: &T,
    options: &DiscoveryOptions,
) -> Result<Vec<DiscoveredBridge>, DiscoveryError> {
    let candidates = fetch_candidates(transport, options).await?;

    let bridges = candidates
        .into_iter()
        .map(|candidate| {
            serde_json::from_value::<DiscoveredBridge>(candidate)
                .map_err(|e| DiscoveryError::Malformed(e.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::info!(count = bridges.len(), "Discovered bridges");

    Ok(bridges)
}

/// Resolves the bridge address.
///
/// An explicit address is returned unchanged without any network call. An
/// empty or blank explicit address counts as no address. Otherwise the
/// discovery service is queried once and the first candidate's
/// `internalipaddress` is returned.
///
/// # Errors
///
/// Same as [`discover_bridges`]; only the first entry has to be well formed.
/// A first entry whose `internalipaddress` is blank is `Malformed` too.
pub async fn resolve_address<T: Transport>(
    transport: &T,
    explicit: Option<&str>,
    options: &DiscoveryOptions,
) -> Result<String, DiscoveryError> {
    if let Some(address) = explicit.filter(|address| !address.trim().is_empty()) {
        return Ok(address.to_string());
    }

    let candidates = fetch_candidates(transport, options).await?;
    let first = candidates.first().ok_or(DiscoveryError::NoBridges)?;

    let address = first
        .get(ADDRESS_FIELD)
        .and_then(Value::as_str)
        .ok_or_else(|| DiscoveryError::Malformed(format!("first entry has no {ADDRESS_FIELD}")))?;

    if address.trim().is_empty() {
        return Err(DiscoveryError::Malformed(format!(
            "first entry has an empty {ADDRESS_FIELD}"
        )));
    }
    let address = address.to_string();

    tracing::info!(
        address = %address,
        candidates = candidates.len(),
        "Resolved bridge address through discovery"
    );

    Ok(address)
}

async fn fetch_candidates<T: Transport>(
    transport: &T,
    options: &DiscoveryOptions,
) -> Result<Vec<Value>, DiscoveryError> {
    let response = transport
        .get(options.url())
        .await
        .map_err(DiscoveryError::Request)?;

    let candidates: Vec<Value> = response
        .parse()
        .map_err(|e| DiscoveryError::Malformed(e.to_string()))?;

    if candidates.is_empty() {
        return Err(DiscoveryError::NoBridges);
    }

    Ok(candidates)
}
