// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport used to talk to the bridge and the discovery service.
//!
//! The [`Transport`] trait is the seam between the bridge/light logic and
//! the network. [`HttpClient`] is the `reqwest`-backed implementation;
//! every request is an independent round trip with a JSON body both ways.

mod http;

pub use http::{HttpClient, HttpConfig};

use reqwest::Method;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{SchemaError, TransportError};

/// Successful (2xx) response from the bridge.
#[derive(Debug, Clone)]
pub struct BridgeResponse {
    status: u16,
    body: String,
}

impl BridgeResponse {
    /// Creates a new response with the given status and body.
    #[must_use]
    pub fn new(status: u16, body: String) -> Self {
        Self { status, body }
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Returns the raw response body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns `true` if the body carries no content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.trim().is_empty()
    }

    /// Parses the body as a specific type.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Json` if the body does not decode into `T`.
    pub fn parse<T: serde::de::DeserializeOwned>(&self) -> Result<T, SchemaError> {
        serde_json::from_str(&self.body).map_err(Into::into)
    }

    /// Returns the API errors the bridge reported inside the body.
    ///
    /// The bridge answers most calls with a list of `{"success": ..}` and
    /// `{"error": ..}` entries, even when the HTTP status is 200.
    #[must_use]
    pub fn api_errors(&self) -> Vec<TransportError> {
        let Ok(entries) = serde_json::from_str::<Vec<Value>>(&self.body) else {
            return Vec::new();
        };

        entries
            .into_iter()
            .filter_map(|entry| entry.get("error").cloned())
            .filter_map(|error| serde_json::from_value::<ApiErrorBody>(error).ok())
            .map(ApiErrorBody::into_error)
            .collect()
    }

    /// Fails if the body reports a bridge API error.
    ///
    /// # Errors
    ///
    /// Returns `TransportError::Api` describing the bridge error.
    pub fn error_for_api(self) -> Result<Self, TransportError> {
        match self.api_errors().into_iter().next() {
            Some(err) => Err(err),
            None => Ok(self),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(rename = "type")]
    error_type: u16,
    #[serde(default)]
    address: String,
    #[serde(default)]
    description: String,
}

impl ApiErrorBody {
    fn into_error(self) -> TransportError {
        TransportError::Api {
            error_type: self.error_type,
            address: self.address,
            description: self.description,
        }
    }
}

/// A transport able to issue JSON requests against absolute URLs.
///
/// Implementations must turn non-2xx statuses and network failures into a
/// `TransportError`; decoding is left to the caller.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Sends a request and returns the successful response.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the request fails or the status is not 2xx.
    async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<&Value>,
    ) -> Result<BridgeResponse, TransportError>;

    /// Sends a GET request.
    ///
    /// # Errors
    ///
    /// See [`Transport::send`].
    async fn get(&self, url: &str) -> Result<BridgeResponse, TransportError> {
        self.send(Method::GET, url, None).await
    }

    /// Sends a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`Transport::send`].
    async fn put(&self, url: &str, body: &Value) -> Result<BridgeResponse, TransportError> {
        self.send(Method::PUT, url, Some(body)).await
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`Transport::send`].
    async fn post(&self, url: &str, body: &Value) -> Result<BridgeResponse, TransportError> {
        self.send(Method::POST, url, Some(body)).await
    }

    /// Sends a DELETE request.
    ///
    /// # Errors
    ///
    /// See [`Transport::send`].
    async fn delete(&self, url: &str) -> Result<BridgeResponse, TransportError> {
        self.send(Method::DELETE, url, None).await
    }
}
