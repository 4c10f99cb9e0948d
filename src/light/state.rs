// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light description and state snapshot as reported by the bridge.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{SchemaError, ValueError};
use crate::types::{AlertMode, ColorMode, EffectMode, XyColor};

/// Last known state of a light.
///
/// Only `on` is reported by every light. The other fields are absent when
/// the light lacks the capability: a white-only bulb has no `hue`, an on/off
/// plug has no `bri`.
///
/// `alert`, `effect` and `colormode` are kept as the bridge spelled them and
/// only parsed by their getters, so a mode this crate does not know about
/// does not stop the rest of the state from being read.
///
/// A `LightState` is a snapshot. It is replaced whole on every refresh and
/// says nothing about changes made by other clients since.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LightState {
    on: bool,
    #[serde(rename = "bri", default, skip_serializing_if = "Option::is_none")]
    brightness: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    hue: Option<u16>,
    #[serde(rename = "sat", default, skip_serializing_if = "Option::is_none")]
    saturation: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    xy: Option<XyColor>,
    #[serde(rename = "ct", default, skip_serializing_if = "Option::is_none")]
    color_temperature: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    alert: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    effect: Option<String>,
    #[serde(rename = "colormode", default, skip_serializing_if = "Option::is_none")]
    color_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    reachable: Option<bool>,
}

impl LightState {
    /// Decodes the `state` object of a device description.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::MissingField("state")` if the description has no
    /// state, or `SchemaError::Json` if the state does not decode.
    pub(crate) fn from_device(device: &Value) -> Result<Self, SchemaError> {
        let state = device
            .get("state")
            .ok_or(SchemaError::MissingField("state"))?;
        Self::deserialize(state).map_err(SchemaError::Json)
    }

    /// On/off state.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Brightness, from 1 (minimum the light can do) to 254.
    #[must_use]
    pub fn brightness(&self) -> Option<u16> {
        self.brightness
    }

    /// Hue, wrapping between 0 and 65535.
    ///
    /// Hue values are hardware dependent: the same value does not give the
    /// same color on two different models.
    #[must_use]
    pub fn hue(&self) -> Option<u16> {
        self.hue
    }

    /// Saturation, from 0 (white) to 254 (most colored).
    #[must_use]
    pub fn saturation(&self) -> Option<u16> {
        self.saturation
    }

    /// CIE xy color coordinates.
    #[must_use]
    pub fn xy(&self) -> Option<XyColor> {
        self.xy
    }

    /// Color temperature in mired, 153 (6500K) to 500 (2000K).
    #[must_use]
    pub fn color_temperature(&self) -> Option<u16> {
        self.color_temperature
    }

    /// Last alert sent to the light.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidAlert` if the bridge reported an alert
    /// name this crate does not know.
    pub fn alert(&self) -> Result<Option<AlertMode>, ValueError> {
        self.alert.as_deref().map(str::parse).transpose()
    }

    /// Dynamic effect.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidEffect` for an unknown effect name.
    pub fn effect(&self) -> Result<Option<EffectMode>, ValueError> {
        self.effect.as_deref().map(str::parse).transpose()
    }

    /// Color mode the light is rendering with.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidColorMode` for an unknown mode name.
    pub fn color_mode(&self) -> Result<Option<ColorMode>, ValueError> {
        self.color_mode.as_deref().map(str::parse).transpose()
    }

    /// Alert name exactly as the bridge reported it.
    #[must_use]
    pub fn raw_alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    /// Effect name exactly as the bridge reported it.
    #[must_use]
    pub fn raw_effect(&self) -> Option<&str> {
        self.effect.as_deref()
    }

    /// Whether the bridge can reach the light.
    ///
    /// Writes to an unreachable light are accepted by the bridge and have no
    /// effect.
    #[must_use]
    pub fn is_reachable(&self) -> Option<bool> {
        self.reachable
    }
}

/// Descriptive fields of a light.
///
/// Read once when the light is listed; never refreshed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LightInfo {
    /// Fixed name describing the type of light, e.g. "Extended color light".
    #[serde(rename = "type")]
    pub light_type: String,
    /// Editable name given to the light.
    pub name: String,
    /// Hardware model.
    #[serde(rename = "modelid", default)]
    pub model_id: String,
    /// Manufacturer name.
    #[serde(rename = "manufacturername", default)]
    pub manufacturer_name: String,
    /// Product name.
    #[serde(rename = "productname", default)]
    pub product_name: String,
    /// MAC address of the device with an endpoint id, `AA:BB:CC:DD:EE:FF:00:11-XX`.
    #[serde(rename = "uniqueid", default)]
    pub unique_id: String,
    /// Software version running on the light.
    #[serde(rename = "swversion", default)]
    pub software_version: String,
}

impl LightInfo {
    /// Decodes the descriptive fields of a device description.
    pub(crate) fn from_device(device: &Value) -> Result<Self, SchemaError> {
        Self::deserialize(device).map_err(SchemaError::Json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extended_color_light() -> Value {
        serde_json::json!({
            "state": {
                "on": true,
                "bri": 144,
                "hue": 13088,
                "sat": 212,
                "xy": [0.5128, 0.4147],
                "ct": 467,
                "alert": "none",
                "effect": "none",
                "colormode": "xy",
                "reachable": true
            },
            "type": "Extended color light",
            "name": "Hue Lamp 1",
            "modelid": "LCT001",
            "manufacturername": "Philips",
            "productname": "Hue color lamp",
            "uniqueid": "00:17:88:01:00:bd:c7:b9-0b",
            "swversion": "66009461"
        })
    }

    #[test]
    fn decode_full_state() {
        let state = LightState::from_device(&extended_color_light()).unwrap();
        assert!(state.is_on());
        assert_eq!(state.brightness(), Some(144));
        assert_eq!(state.hue(), Some(13088));
        assert_eq!(state.saturation(), Some(212));
        assert_eq!(state.xy(), Some(XyColor::new(0.5128, 0.4147)));
        assert_eq!(state.color_temperature(), Some(467));
        assert_eq!(state.alert(), Ok(Some(AlertMode::None)));
        assert_eq!(state.effect(), Ok(Some(EffectMode::None)));
        assert_eq!(state.color_mode(), Ok(Some(ColorMode::Xy)));
        assert_eq!(state.is_reachable(), Some(true));
    }

    #[test]
    fn decode_dimmable_state() {
        let device = serde_json::json!({
            "state": {"on": false, "bri": 1, "alert": "select", "reachable": false},
            "type": "Dimmable light",
            "name": "Hallway"
        });
        let state = LightState::from_device(&device).unwrap();
        assert!(!state.is_on());
        assert_eq!(state.brightness(), Some(1));
        assert_eq!(state.hue(), None);
        assert_eq!(state.xy(), None);
        assert_eq!(state.alert(), Ok(Some(AlertMode::Select)));
        assert_eq!(state.effect(), Ok(None));
    }

    #[test]
    fn unknown_modes_do_not_block_decoding() {
        let device = serde_json::json!({
            "state": {
                "on": true,
                "bri": 80,
                "alert": "breathe",
                "effect": "candle",
                "colormode": "gradient"
            }
        });
        let state = LightState::from_device(&device).unwrap();
        assert!(state.is_on());
        assert_eq!(state.brightness(), Some(80));
        assert_eq!(
            state.alert(),
            Err(ValueError::InvalidAlert("breathe".to_string()))
        );
        assert_eq!(
            state.effect(),
            Err(ValueError::InvalidEffect("candle".to_string()))
        );
        assert!(state.color_mode().is_err());
        assert_eq!(state.raw_alert(), Some("breathe"));
        assert_eq!(state.raw_effect(), Some("candle"));
    }

    #[test]
    fn missing_state_is_reported() {
        let device = serde_json::json!({"type": "Dimmable light", "name": "Hallway"});
        let err = LightState::from_device(&device).unwrap_err();
        assert!(matches!(err, SchemaError::MissingField("state")));
    }

    #[test]
    fn state_without_power_is_rejected() {
        let device = serde_json::json!({"state": {"bri": 10}});
        assert!(matches!(
            LightState::from_device(&device),
            Err(SchemaError::Json(_))
        ));
    }

    #[test]
    fn decode_info() {
        let info = LightInfo::from_device(&extended_color_light()).unwrap();
        assert_eq!(info.light_type, "Extended color light");
        assert_eq!(info.name, "Hue Lamp 1");
        assert_eq!(info.model_id, "LCT001");
        assert_eq!(info.manufacturer_name, "Philips");
        assert_eq!(info.product_name, "Hue color lamp");
        assert_eq!(info.unique_id, "00:17:88:01:00:bd:c7:b9-0b");
        assert_eq!(info.software_version, "66009461");
    }

    #[test]
    fn info_tolerates_missing_optional_fields() {
        let device = serde_json::json!({"type": "On/Off plug-in unit", "name": "Plug"});
        let info = LightInfo::from_device(&device).unwrap();
        assert_eq!(info.name, "Plug");
        assert!(info.product_name.is_empty());
    }
}
