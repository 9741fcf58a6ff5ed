// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-face potential estimation

use crate::error::{Error, Result};

/// Scalar multipliers applied to every face area.
///
/// `irradiance` is a caller-defined scalar (typically kWh/m²/day); the
/// pipeline only multiplies, so whatever unit goes in comes out.
/// `illumination` is the cosine of the solar zenith angle, already clamped
/// or taken absolute by the solar layer.
#[derive(Debug, Clone, Copy)]
pub struct PotentialParams {
    pub irradiance: f64,
    pub efficiency: f64,
    pub illumination: f64,
}

impl PotentialParams {
    /// Validate the multipliers.
    ///
    /// Efficiency must lie in (0, 1]; irradiance and illumination must be
    /// non-negative.
    pub fn validate(&self) -> Result<()> {
        if !(self.efficiency > 0.0 && self.efficiency <= 1.0) {
            return Err(Error::InvalidParameter {
                field: "efficiency",
                reason: format!("{} is outside (0, 1]", self.efficiency),
            });
        }
        if !(self.irradiance >= 0.0) {
            return Err(Error::InvalidParameter {
                field: "irradiance",
                reason: format!("{} is negative", self.irradiance),
            });
        }
        if !(self.illumination >= 0.0) {
            return Err(Error::InvalidParameter {
                field: "illumination",
                reason: format!("{} is negative", self.illumination),
            });
        }
        Ok(())
    }
}

/// potential_i = area_i × irradiance × efficiency × illumination, in face
/// order.
pub fn face_potentials(areas: &[f64], params: &PotentialParams) -> Result<Vec<f64>> {
    params.validate()?;
    let factor = params.irradiance * params.efficiency * params.illumination;
    Ok(areas.iter().map(|&area| area * factor).collect())
}
