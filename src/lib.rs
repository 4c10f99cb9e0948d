// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `hue_lights` - A Rust library to control lights through a Hue bridge.
//!
//! This library talks to the bridge's local JSON/HTTP API: it finds the
//! bridge, lists its lights, and reads and writes their state.
//!
//! # Supported Features
//!
//! - **Discovery**: explicit address or the public discovery service
//! - **Lights collection**: list, fetch one, delete, search for new lights
//! - **Light state**: power, brightness, hue, saturation, CIE xy, color
//!   temperature, alert and effect modes
//!
//! # State Synchronization
//!
//! The bridge is the only source of truth. Reading a light's state always
//! fetches it first; writing always fetches it again afterwards, so the
//! local [`Light`] reflects what the bridge did rather than what was asked.
//! See the [`light`] module for details.
//!
//! # Quick Start
//!
//! ```no_run
//! use hue_lights::{Bridge, StateUpdate};
//! use hue_lights::types::EffectMode;
//!
//! #[tokio::main]
//! async fn main() -> hue_lights::Result<()> {
//!     // Omit the address to use the discovery service
//!     let bridge = Bridge::connect("my-credential", Some("192.168.1.20")).await?;
//!
//!     let mut lights = bridge.list_lights().await?;
//!     if let Some(light) = lights.first_mut() {
//!         light.set_on(true).await?;
//!         light.set_brightness(254).await?;
//!
//!         // Several fields in one request
//!         light
//!             .update_state(&StateUpdate::new().hue(43690).saturation(254))
//!             .await?;
//!
//!         light.set_effect(EffectMode::ColorLoop).await?;
//!         let brightness = light.brightness().await?;
//!         println!("{} is at brightness {}", light.name(), brightness);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod bridge;
pub mod discovery;
pub mod error;
pub mod light;
pub mod protocol;
pub mod types;

pub use bridge::{Bridge, BridgeBuilder};
pub use discovery::{DEFAULT_DISCOVERY_URL, DiscoveredBridge, DiscoveryOptions};
pub use error::{DiscoveryError, Error, Result, SchemaError, TransportError, ValueError};
pub use light::{Light, LightInfo, LightState, StateUpdate};
pub use protocol::{BridgeResponse, HttpClient, HttpConfig, Transport};
pub use types::{AlertMode, ColorMode, EffectMode, LightId, XyColor};
