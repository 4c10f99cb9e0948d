// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light identifier type.

use std::fmt;

/// Bridge-assigned identifier of a light.
///
/// The bridge keys its lights collection by short numeric strings
/// (`"1"`, `"2"`, ...). The identifier is stable for the lifetime of the
/// light on the bridge.
///
/// # Examples
///
/// ```
/// use hue_lights::types::LightId;
///
/// let id = LightId::new("3");
/// assert_eq!(id.as_str(), "3");
/// assert_eq!(LightId::from(3u32), id);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LightId(String);

impl LightId {
    /// Creates an identifier from the bridge's key.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as sent in request paths.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LightId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for LightId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u32> for LightId {
    fn from(id: u32) -> Self {
        Self(id.to_string())
    }
}

impl AsRef<str> for LightId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
