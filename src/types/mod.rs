// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types exchanged with the bridge.
//!
//! # Types
//!
//! - [`LightId`] - Bridge-assigned light identifier
//! - [`XyColor`] - CIE xy color coordinates
//! - [`ColorMode`] - Color mode reported by a light (hs, xy, ct)
//! - [`AlertMode`] - Alert effect (none, select, lselect)
//! - [`EffectMode`] - Dynamic effect (none, colorloop)

mod color;
mod light_id;
mod mode;

pub use color::{ColorMode, XyColor};
pub use light_id::LightId;
pub use mode::{AlertMode, EffectMode};
