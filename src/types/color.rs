// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Color types for light control.
//!
//! Values are carried as the bridge reports them. Nothing here clamps or
//! rejects out-of-range numbers: the bridge decides what a light accepts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// A color as CIE xy coordinates.
///
/// Both coordinates are nominally between 0 and 1. The same xy value looks
/// the same on every lamp whose gamut contains it; otherwise the lamp picks
/// the closest color it can produce.
///
/// On the wire this is a two-element array, `[x, y]`.
///
/// # Examples
///
/// ```
/// use hue_lights::types::XyColor;
///
/// let warm = XyColor::new(0.409, 0.5179);
/// assert_eq!(serde_json::to_string(&warm).unwrap(), "[0.409,0.5179]");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct XyColor {
    /// x coordinate.
    pub x: f64,
    /// y coordinate.
    pub y: f64,
}

impl XyColor {
    /// D65 white point.
    pub const WHITE: Self = Self {
        x: 0.3127,
        y: 0.3290,
    };

    /// Creates a new coordinate pair.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for XyColor {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<XyColor> for [f64; 2] {
    fn from(xy: XyColor) -> Self {
        [xy.x, xy.y]
    }
}

impl From<(f64, f64)> for XyColor {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for XyColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

/// The color mode a light is currently rendering with.
///
/// Reported by the bridge; which of `hue`/`sat`, `xy` or `ct` was the last
/// one set decides the mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Hue and saturation.
    Hs,
    /// CIE xy coordinates.
    Xy,
    /// Color temperature.
    Ct,
}

impl ColorMode {
    /// Returns the bridge string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hs => "hs",
            Self::Xy => "xy",
            Self::Ct => "ct",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorMode {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hs" => Ok(Self::Hs),
            "xy" => Ok(Self::Xy),
            "ct" => Ok(Self::Ct),
            _ => Err(ValueError::InvalidColorMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xy_serializes_as_array() {
        let xy = XyColor::new(0.5, 0.25);
        assert_eq!(serde_json::to_value(xy).unwrap(), serde_json::json!([0.5, 0.25]));
    }

    #[test]
    fn xy_deserializes_from_array() {
        let xy: XyColor = serde_json::from_str("[0.4091, 0.518]").unwrap();
        assert!((xy.x - 0.4091).abs() < f64::EPSILON);
        assert!((xy.y - 0.518).abs() < f64::EPSILON);
    }

    #[test]
    fn xy_rejects_wrong_arity() {
        assert!(serde_json::from_str::<XyColor>("[0.4]").is_err());
    }

    #[test]
    fn xy_out_of_range_is_kept() {
        let xy = XyColor::from((1.5, -0.2));
        assert!((xy.x - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn color_mode_from_str() {
        assert_eq!("xy".parse::<ColorMode>().unwrap(), ColorMode::Xy);
        assert_eq!("CT".parse::<ColorMode>().unwrap(), ColorMode::Ct);
        assert!("rgb".parse::<ColorMode>().is_err());
    }

    #[test]
    fn color_mode_serde() {
        let mode: ColorMode = serde_json::from_str("\"hs\"").unwrap();
        assert_eq!(mode, ColorMode::Hs);
        assert_eq!(mode.to_string(), "hs");
    }
}
