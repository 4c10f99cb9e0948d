// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Alert and effect modes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Temporary alert effect of a light.
///
/// The bridge keeps the last alert sent to the light: after a `select`
/// breathe cycle has finished, the reported alert is still `select`.
///
/// # Examples
///
/// ```
/// use hue_lights::types::AlertMode;
///
/// assert_eq!(AlertMode::LSelect.as_str(), "lselect");
/// assert_eq!("select".parse::<AlertMode>().unwrap(), AlertMode::Select);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertMode {
    /// No alert effect.
    #[default]
    None,
    /// One breathe cycle.
    Select,
    /// Breathe cycles for 15 seconds or until `none` is sent.
    #[serde(rename = "lselect")]
    LSelect,
}

impl AlertMode {
    /// Returns the bridge string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Select => "select",
            Self::LSelect => "lselect",
        }
    }
}

impl fmt::Display for AlertMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlertMode {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "select" => Ok(Self::Select),
            "lselect" => Ok(Self::LSelect),
            _ => Err(ValueError::InvalidAlert(s.to_string())),
        }
    }
}

/// Dynamic effect of a light.
///
/// `colorloop` cycles through all hues using the current brightness and
/// saturation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectMode {
    /// No effect.
    #[default]
    None,
    /// Cycle through all hues.
    ColorLoop,
}

impl EffectMode {
    /// Returns the bridge string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::ColorLoop => "colorloop",
        }
    }
}

impl fmt::Display for EffectMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EffectMode {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "colorloop" => Ok(Self::ColorLoop),
            _ => Err(ValueError::InvalidEffect(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_serde_names() {
        assert_eq!(
            serde_json::to_string(&AlertMode::LSelect).unwrap(),
            "\"lselect\""
        );
        let alert: AlertMode = serde_json::from_str("\"select\"").unwrap();
        assert_eq!(alert, AlertMode::Select);
    }

    #[test]
    fn alert_from_str_invalid() {
        assert_eq!(
            "blink".parse::<AlertMode>(),
            Err(ValueError::InvalidAlert("blink".to_string()))
        );
    }

    #[test]
    fn effect_serde_names() {
        assert_eq!(
            serde_json::to_string(&EffectMode::ColorLoop).unwrap(),
            "\"colorloop\""
        );
        let effect: EffectMode = serde_json::from_str("\"none\"").unwrap();
        assert_eq!(effect, EffectMode::None);
    }

    #[test]
    fn effect_from_str() {
        assert_eq!("ColorLoop".parse::<EffectMode>().unwrap(), EffectMode::ColorLoop);
        assert!("strobe".parse::<EffectMode>().is_err());
    }

    #[test]
    fn display_matches_wire_name() {
        assert_eq!(AlertMode::None.to_string(), "none");
        assert_eq!(EffectMode::ColorLoop.to_string(), "colorloop");
    }
}
