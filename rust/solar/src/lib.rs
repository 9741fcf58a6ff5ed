// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # SolMap Solar
//!
//! Sun geometry for the heat-map pipeline: solar declination, hour angle,
//! cosine of the solar zenith angle and sun position. Timestamps are naive
//! local times in the site's fixed reference zone; only day-of-year and
//! wall-clock time enter the formulas, so no timezone database is needed.
//!
//! ## Quick Start
//!
//! ```rust
//! use solmap_solar::{illumination, parse_timestamp, IlluminationMode, Site, SolarConfig};
//!
//! let site = Site::new(23.030357, 72.517845);
//! let noon = parse_timestamp("2024-06-21 12:00:00").unwrap();
//! let factor = illumination(&site, noon, &SolarConfig::default(), IlluminationMode::ClampNight);
//! assert!(factor > 0.9 && factor <= 1.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization support for sites and model enums

pub mod declination;
pub mod error;
pub mod position;
pub mod time;
pub mod zenith;

pub use declination::DeclinationModel;
pub use error::{Error, Result};
pub use position::{sun_direction, SunPosition};
pub use time::parse_timestamp;
pub use zenith::{cos_zenith, hour_angle_deg, illumination, IlluminationMode, Site, SolarConfig};
