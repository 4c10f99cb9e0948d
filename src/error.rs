// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `hue_lights` library.
//!
//! Failures are split by where they happen, so callers can tell "the bridge
//! could not be found" from "the bridge is unreachable" from "the bridge
//! answered with something we do not understand".

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Bridge discovery failed.
    #[error("discovery error: {0}")]
    Discovery(#[from] DiscoveryError),

    /// An HTTP call to the bridge failed.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The bridge answered with a body of an unexpected shape.
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),

    /// A value could not be converted into a bridge type.
    #[error("value error: {0}")]
    Value(#[from] ValueError),
}

/// Errors raised while locating a bridge through the discovery service.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// The discovery request itself failed.
    #[error("discovery request failed: {0}")]
    Request(#[source] TransportError),

    /// The discovery service returned no candidate bridges.
    #[error("no bridge found")]
    NoBridges,

    /// The discovery response did not have the expected shape.
    #[error("malformed discovery response: {0}")]
    Malformed(String),
}

/// Errors related to HTTP communication with the bridge.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request could not be sent or the body could not be read.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The bridge answered with a non-success status code.
    #[error("HTTP {status} - {reason}")]
    Status {
        /// Numeric status code.
        status: u16,
        /// Canonical reason phrase.
        reason: String,
    },

    /// The bridge reported an API error inside a successful response.
    #[error("bridge error {error_type} at {address}: {description}")]
    Api {
        /// Bridge error code (1 is "unauthorized user").
        error_type: u16,
        /// Resource the error applies to.
        address: String,
        /// Human readable message from the bridge.
        description: String,
    },

    /// Invalid bridge address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// Errors related to decoding bridge responses.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// JSON decoding failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A field the caller asked for is not reported by the light.
    #[error("missing field in response: {0}")]
    MissingField(&'static str),

    /// Unexpected response format.
    #[error("unexpected response format: {0}")]
    UnexpectedFormat(String),
}

/// Errors raised when parsing string values into bridge types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// Unknown alert mode name.
    #[error("invalid alert mode: {0}")]
    InvalidAlert(String),

    /// Unknown effect mode name.
    #[error("invalid effect mode: {0}")]
    InvalidEffect(String),

    /// Unknown color mode name.
    #[error("invalid color mode: {0}")]
    InvalidColorMode(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
