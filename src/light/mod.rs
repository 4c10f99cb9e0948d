// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A single light on the bridge.
//!
//! # Synchronization
//!
//! A [`Light`] keeps a snapshot of the light's state, but never answers a
//! state read from it. Every state getter first fetches the light from the
//! bridge and replaces the whole snapshot, then answers from the fresh copy.
//! Every setter sends the new value and then fetches the light again, so the
//! snapshot ends up holding what the bridge actually did, which may differ
//! from what was asked (clamped values, unreachable lights).
//!
//! | Call | Round trips |
//! |------|-------------|
//! | getter (`brightness`, ...) | `GET /lights/<id>` |
//! | setter (`set_brightness`, ...) | `PUT /lights/<id>/state`, then `GET /lights/<id>` |
//!
//! A failed request leaves the snapshot as it was.
//!
//! Getters and setters take `&mut self`: one owner drives a light at a time.
//! Two `Light` values for the same bridge light (for example clones, or two
//! listings) have independent snapshots and are not coordinated; the last
//! refresh wins.
//!
//! ```no_run
//! use hue_lights::Bridge;
//!
//! # async fn example() -> hue_lights::Result<()> {
//! let bridge = Bridge::connect("my-credential", Some("192.168.1.20")).await?;
//!
//! for mut light in bridge.list_lights().await? {
//!     if !light.is_on().await? {
//!         light.set_on(true).await?;
//!     }
//!     light.set_brightness(200).await?;
//!     println!("{}: bri {:?}", light.name(), light.snapshot().brightness());
//! }
//! # Ok(())
//! # }
//! ```

mod state;
mod update;

pub use state::{LightInfo, LightState};
pub use update::StateUpdate;

use std::sync::Arc;

use serde_json::Value;

use crate::error::{Error, Result, SchemaError};
use crate::protocol::{HttpClient, Transport};
use crate::types::{AlertMode, EffectMode, LightId, XyColor};

/// A light known to the bridge.
#[derive(Debug)]
pub struct Light<T: Transport = HttpClient> {
    id: LightId,
    info: LightInfo,
    state: LightState,
    url: String,
    transport: Arc<T>,
}

impl<T: Transport> Clone for Light<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            info: self.info.clone(),
            state: self.state.clone(),
            url: self.url.clone(),
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T: Transport> Light<T> {
    /// Builds a light from its device description.
    pub(crate) fn from_device(
        id: LightId,
        device: &Value,
        url: String,
        transport: Arc<T>,
    ) -> std::result::Result<Self, SchemaError> {
        Ok(Self {
            info: LightInfo::from_device(device)?,
            state: LightState::from_device(device)?,
            id,
            url,
            transport,
        })
    }

    /// Returns the bridge-assigned identifier.
    #[must_use]
    pub fn id(&self) -> &LightId {
        &self.id
    }

    /// Returns the descriptive fields read when the light was listed.
    #[must_use]
    pub fn info(&self) -> &LightInfo {
        &self.info
    }

    /// Returns the light's name as it was when listed.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.info.name
    }

    /// Returns the light's endpoint, `<base>/lights/<id>`.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the last fetched state without contacting the bridge.
    ///
    /// The snapshot is only as current as the last successful refresh.
    #[must_use]
    pub fn snapshot(&self) -> &LightState {
        &self.state
    }

    /// Fetches the light and replaces the snapshot with its state.
    ///
    /// A successful response with an empty body leaves the snapshot as is.
    ///
    /// # Errors
    ///
    /// Returns `Error::Transport` if the request fails and `Error::Schema` if
    /// the response has no decodable `state`. The snapshot is unchanged in
    /// both cases.
    pub async fn refresh(&mut self) -> Result<()> {
        let response = self.transport.get(&self.url).await?;

        if response.is_empty() {
            tracing::debug!(light = %self.id, "Empty refresh response, keeping snapshot");
            return Ok(());
        }

        let response = response.error_for_api()?;
        let device: Value = response.parse()?;
        self.state = LightState::from_device(&device)?;

        Ok(())
    }

    /// Writes several state fields in one request, then refreshes.
    ///
    /// Bridge-side rejections of individual fields are logged and do not
    /// fail the call: the refresh that follows shows what the light really
    /// does.
    ///
    /// # Errors
    ///
    /// Returns `Error::Transport` if the write fails (no refresh is attempted)
    /// or if the refresh fails. The snapshot is unchanged in both cases.
    pub async fn update_state(&mut self, update: &StateUpdate) -> Result<()> {
        let url = format!("{}/state", self.url);
        let response = self.transport.put(&url, &update.to_json()).await?;

        for error in response.api_errors() {
            tracing::warn!(light = %self.id, error = %error, "Bridge rejected state field");
        }

        self.refresh().await
    }

    async fn read<V>(
        &mut self,
        field: &'static str,
        get: impl FnOnce(&LightState) -> Option<V>,
    ) -> Result<V> {
        self.refresh().await?;
        get(&self.state).ok_or(Error::Schema(SchemaError::MissingField(field)))
    }

    // ========== Getters ==========

    /// Fetches the on/off state.
    ///
    /// # Errors
    ///
    /// Returns error if the refresh fails.
    pub async fn is_on(&mut self) -> Result<bool> {
        self.refresh().await?;
        Ok(self.state.is_on())
    }

    /// Fetches the brightness (1-254).
    ///
    /// # Errors
    ///
    /// Returns error if the refresh fails, or `SchemaError::MissingField` if
    /// the light is not dimmable.
    pub async fn brightness(&mut self) -> Result<u16> {
        self.read("bri", LightState::brightness).await
    }

    /// Fetches the hue (0-65535, wrapping).
    ///
    /// # Errors
    ///
    /// Returns error if the refresh fails, or `SchemaError::MissingField` if
    /// the light has no color.
    pub async fn hue(&mut self) -> Result<u16> {
        self.read("hue", LightState::hue).await
    }

    /// Fetches the saturation (0-254).
    ///
    /// # Errors
    ///
    /// Returns error if the refresh fails, or `SchemaError::MissingField` if
    /// the light has no color.
    pub async fn saturation(&mut self) -> Result<u16> {
        self.read("sat", LightState::saturation).await
    }

    /// Fetches the CIE xy color.
    ///
    /// # Errors
    ///
    /// Returns error if the refresh fails, or `SchemaError::MissingField` if
    /// the light has no color.
    pub async fn xy(&mut self) -> Result<XyColor> {
        self.read("xy", LightState::xy).await
    }

    /// Fetches the color temperature in mired (153-500).
    ///
    /// # Errors
    ///
    /// Returns error if the refresh fails, or `SchemaError::MissingField` if
    /// the light has no tunable white.
    pub async fn color_temperature(&mut self) -> Result<u16> {
        self.read("ct", LightState::color_temperature).await
    }

    /// Fetches the last alert sent to the light.
    ///
    /// # Errors
    ///
    /// Returns error if the refresh fails, `SchemaError::MissingField` if
    /// the light does not report alerts, or `ValueError::InvalidAlert` if the
    /// reported alert is unknown. The snapshot is refreshed in the last case.
    pub async fn alert(&mut self) -> Result<AlertMode> {
        self.refresh().await?;
        self.state
            .alert()?
            .ok_or(Error::Schema(SchemaError::MissingField("alert")))
    }

    /// Fetches the dynamic effect.
    ///
    /// # Errors
    ///
    /// Returns error if the refresh fails, `SchemaError::MissingField` if
    /// the light has no effects, or `ValueError::InvalidEffect` if the
    /// reported effect is unknown.
    pub async fn effect(&mut self) -> Result<EffectMode> {
        self.refresh().await?;
        self.state
            .effect()?
            .ok_or(Error::Schema(SchemaError::MissingField("effect")))
    }

    // ========== Setters ==========

    /// Turns the light on or off.
    ///
    /// # Errors
    ///
    /// See [`update_state`](Self::update_state).
    pub async fn set_on(&mut self, on: bool) -> Result<()> {
        self.update_state(&StateUpdate::new().on(on)).await
    }

    /// Sets the brightness. Values outside 1-254 are sent unchanged.
    ///
    /// # Errors
    ///
    /// See [`update_state`](Self::update_state).
    pub async fn set_brightness(&mut self, brightness: u16) -> Result<()> {
        self.update_state(&StateUpdate::new().brightness(brightness))
            .await
    }

    /// Sets the hue.
    ///
    /// # Errors
    ///
    /// See [`update_state`](Self::update_state).
    pub async fn set_hue(&mut self, hue: u16) -> Result<()> {
        self.update_state(&StateUpdate::new().hue(hue)).await
    }

    /// Sets the saturation. Values outside 0-254 are sent unchanged.
    ///
    /// # Errors
    ///
    /// See [`update_state`](Self::update_state).
    pub async fn set_saturation(&mut self, saturation: u16) -> Result<()> {
        self.update_state(&StateUpdate::new().saturation(saturation))
            .await
    }

    /// Sets the CIE xy color.
    ///
    /// # Errors
    ///
    /// See [`update_state`](Self::update_state).
    pub async fn set_xy(&mut self, xy: XyColor) -> Result<()> {
        self.update_state(&StateUpdate::new().xy(xy)).await
    }

    /// Sets the color temperature in mired. Values outside 153-500 are sent
    /// unchanged.
    ///
    /// # Errors
    ///
    /// See [`update_state`](Self::update_state).
    pub async fn set_color_temperature(&mut self, mired: u16) -> Result<()> {
        self.update_state(&StateUpdate::new().color_temperature(mired))
            .await
    }

    /// Sets the alert mode.
    ///
    /// # Errors
    ///
    /// See [`update_state`](Self::update_state).
    pub async fn set_alert(&mut self, alert: AlertMode) -> Result<()> {
        self.update_state(&StateUpdate::new().alert(alert)).await
    }

    /// Sets the effect mode.
    ///
    /// # Errors
    ///
    /// See [`update_state`](Self::update_state).
    pub async fn set_effect(&mut self, effect: EffectMode) -> Result<()> {
        self.update_state(&StateUpdate::new().effect(effect)).await
    }
}
