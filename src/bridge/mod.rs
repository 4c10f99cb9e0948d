// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bridge session and the lights collection.
//!
//! A [`Bridge`] binds a bridge address to a credential. The resulting
//! request root, `http://<address>/api/<credential>`, is fixed for the life
//! of the session; every [`Light`] obtained from it derives its endpoint from
//! that root.

mod builder;

pub use builder::BridgeBuilder;

use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::{Value, json};

use crate::error::{Error, Result};
use crate::light::Light;
use crate::protocol::{HttpClient, Transport};
use crate::types::LightId;

/// A session with one bridge.
///
/// # Examples
///
/// ```no_run
/// use hue_lights::Bridge;
///
/// # async fn example() -> hue_lights::Result<()> {
/// // Address resolved through the discovery service
/// let bridge = Bridge::connect("my-credential", None).await?;
///
/// let lights = bridge.list_lights().await?;
/// println!("{} lights", lights.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Bridge<T: Transport = HttpClient> {
    credential: String,
    address: String,
    base_url: String,
    transport: Arc<T>,
}

impl Bridge<HttpClient> {
    /// Creates a builder for a session using `credential`.
    #[must_use]
    pub fn builder(credential: impl Into<String>) -> BridgeBuilder {
        BridgeBuilder::new(credential)
    }

    /// Opens a session with default settings.
    ///
    /// With `address` set no request is made; otherwise, or when it is
    /// empty, the discovery service is queried once.
    ///
    /// # Errors
    ///
    /// Returns `Error::Discovery` if the address has to be discovered and
    /// discovery fails.
    pub async fn connect(credential: impl Into<String>, address: Option<&str>) -> Result<Self> {
        let mut builder = Self::builder(credential);
        if let Some(address) = address {
            builder = builder.with_address(address);
        }
        builder.build().await
    }
}

impl<T: Transport> Bridge<T> {
    /// Returns the credential used in request paths.
    #[must_use]
    pub fn credential(&self) -> &str {
        &self.credential
    }

    /// Returns the bridge address the session is bound to.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Returns the request root, `<scheme>://<address>/api/<credential>`.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the lights collection endpoint.
    #[must_use]
    pub fn lights_url(&self) -> String {
        format!("{}/lights", self.base_url)
    }

    fn light_url(&self, id: &LightId) -> String {
        format!("{}/lights/{}", self.base_url, urlencoding::encode(id.as_str()))
    }

    /// Lists every light known to the bridge.
    ///
    /// Lights come back in the order the bridge listed them, which is not
    /// necessarily sorted by identifier.
    ///
    /// # Errors
    ///
    /// Returns `Error::Transport` if the request fails or the bridge reports
    /// an API error (e.g. unauthorized credential), and `Error::Schema` if a
    /// light description does not decode.
    pub async fn list_lights(&self) -> Result<Vec<Light<T>>> {
        let response = self.transport.get(&self.lights_url()).await?;
        let response = response.error_for_api()?;
        let devices: IndexMap<String, Value> = response.parse()?;

        tracing::debug!(count = devices.len(), "Listed lights");

        devices
            .into_iter()
            .map(|(id, device)| {
                let id = LightId::from(id);
                let url = self.light_url(&id);
                Light::from_device(id, &device, url, Arc::clone(&self.transport)).map_err(Error::from)
            })
            .collect()
    }

    /// Fetches a single light by identifier.
    ///
    /// # Errors
    ///
    /// Returns `Error::Transport` if the request fails or the light does not
    /// exist, and `Error::Schema` if the description does not decode.
    pub async fn get_light(&self, id: impl Into<LightId>) -> Result<Light<T>> {
        let id = id.into();
        let url = self.light_url(&id);

        let response = self.transport.get(&url).await?;
        let response = response.error_for_api()?;
        let device: Value = response.parse()?;

        Ok(Light::from_device(id, &device, url, Arc::clone(&self.transport))?)
    }

    /// Deletes a light from the bridge.
    ///
    /// The local `Light` value is left untouched; drop it afterwards.
    ///
    /// # Errors
    ///
    /// Returns `Error::Transport` if the request fails or the bridge refuses,
    /// including when the light was already deleted.
    pub async fn delete_light(&self, light: &Light<T>) -> Result<()> {
        self.delete_light_by_id(light.id().clone()).await
    }

    /// Deletes a light from the bridge by identifier.
    ///
    /// # Errors
    ///
    /// See [`delete_light`](Self::delete_light).
    pub async fn delete_light_by_id(&self, id: impl Into<LightId>) -> Result<()> {
        let id = id.into();
        let response = self.transport.delete(&self.light_url(&id)).await?;
        response.error_for_api()?;

        tracing::debug!(light = %id, "Deleted light");

        Ok(())
    }

    /// Asks the bridge to start searching for new lights.
    ///
    /// The search runs on the bridge for about a minute; lights it finds show
    /// up in later [`list_lights`](Self::list_lights) calls.
    ///
    /// # Errors
    ///
    /// Returns `Error::Transport` if the request fails or the bridge refuses.
    pub async fn search_new_lights(&self) -> Result<()> {
        let response = self.transport.post(&self.lights_url(), &json!({})).await?;
        response.error_for_api()?;
        Ok(())
    }
}
