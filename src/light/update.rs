// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! State update payloads.

use serde_json::{Map, Value, json};

use crate::types::{AlertMode, EffectMode, XyColor};

/// A set of state fields to write to a light in one request.
///
/// Only the fields that were set end up in the request body. Values are not
/// range checked; the bridge decides what to accept.
///
/// # Examples
///
/// ```
/// use hue_lights::StateUpdate;
///
/// let update = StateUpdate::new().on(true).brightness(200);
/// assert_eq!(update.to_json(), serde_json::json!({"on": true, "bri": 200}));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateUpdate {
    on: Option<bool>,
    brightness: Option<u16>,
    hue: Option<u16>,
    saturation: Option<u16>,
    xy: Option<XyColor>,
    color_temperature: Option<u16>,
    alert: Option<AlertMode>,
    effect: Option<EffectMode>,
}

impl StateUpdate {
    /// Creates an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the power state.
    #[must_use]
    pub fn on(mut self, on: bool) -> Self {
        self.on = Some(on);
        self
    }

    /// Sets the brightness (`bri`).
    #[must_use]
    pub fn brightness(mut self, brightness: u16) -> Self {
        self.brightness = Some(brightness);
        self
    }

    /// Sets the hue.
    #[must_use]
    pub fn hue(mut self, hue: u16) -> Self {
        self.hue = Some(hue);
        self
    }

    /// Sets the saturation (`sat`).
    #[must_use]
    pub fn saturation(mut self, saturation: u16) -> Self {
        self.saturation = Some(saturation);
        self
    }

    /// Sets the CIE xy color.
    #[must_use]
    pub fn xy(mut self, xy: XyColor) -> Self {
        self.xy = Some(xy);
        self
    }

    /// Sets the color temperature in mired (`ct`).
    #[must_use]
    pub fn color_temperature(mut self, mired: u16) -> Self {
        self.color_temperature = Some(mired);
        self
    }

    /// Sets the alert mode.
    #[must_use]
    pub fn alert(mut self, alert: AlertMode) -> Self {
        self.alert = Some(alert);
        self
    }

    /// Sets the effect mode.
    #[must_use]
    pub fn effect(mut self, effect: EffectMode) -> Self {
        self.effect = Some(effect);
        self
    }

    /// Returns `true` if no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Builds the request body, containing exactly the fields set.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let mut body = Map::new();

        if let Some(on) = self.on {
            body.insert("on".to_string(), json!(on));
        }
        if let Some(bri) = self.brightness {
            body.insert("bri".to_string(), json!(bri));
        }
        if let Some(hue) = self.hue {
            body.insert("hue".to_string(), json!(hue));
        }
        if let Some(sat) = self.saturation {
            body.insert("sat".to_string(), json!(sat));
        }
        if let Some(xy) = self.xy {
            body.insert("xy".to_string(), json!([xy.x, xy.y]));
        }
        if let Some(ct) = self.color_temperature {
            body.insert("ct".to_string(), json!(ct));
        }
        if let Some(alert) = self.alert {
            body.insert("alert".to_string(), json!(alert.as_str()));
        }
        if let Some(effect) = self.effect {
            body.insert("effect".to_string(), json!(effect.as_str()));
        }

        Value::Object(body)
    }
}
