// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Solar declination models
//!
//! Two equivalent first-order approximations of Earth's axial tilt over the
//! year are in circulation: a cosine anchored ten days after the winter
//! solstice and a sine anchored at day 284. Their amplitudes differ by
//! 0.01° and their anchors by a fraction of a day; both are kept as named
//! strategies so results can be compared model-for-model instead of the
//! difference being papered over.

/// Declination strategy, selectable per call site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeclinationModel {
    /// δ = −23.44° · cos(360/365 · (n + 10))
    #[default]
    CosineDay10,
    /// δ = 23.45° · sin(360/365 · (284 + n))
    SineDay284,
}

impl DeclinationModel {
    /// Solar declination in degrees for a 1-based day of year
    pub fn declination_deg(self, day_of_year: u32) -> f64 {
        let n = f64::from(day_of_year);
        match self {
            Self::CosineDay10 => -23.44 * (360.0 / 365.0 * (n + 10.0)).to_radians().cos(),
            Self::SineDay284 => 23.45 * (360.0 / 365.0 * (284.0 + n)).to_radians().sin(),
        }
    }
}
