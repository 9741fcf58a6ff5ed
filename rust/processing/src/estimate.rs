// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Single-number potential estimates
//!
//! The same calculator the heat map uses, pointed at a box-shaped building
//! instead of a mesh: rooftop potential from the footprint, BIPV potential
//! from one facade. Uses the sine-anchored declination with longitude
//! correction and the absolute illumination mode, so an estimate is never
//! zeroed by the clock.

use serde::{Deserialize, Serialize};
use tracing::debug;

use solmap_geometry::{face_potentials, PotentialParams};
use solmap_solar::{
    illumination, parse_timestamp, DeclinationModel, IlluminationMode, Site, SolarConfig,
};

use crate::error::{Error, Result};

/// Box dimensions of the building under estimate
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SurfaceDimensions {
    pub length: f64,
    pub breadth: f64,
    pub height: f64,
}

/// Conversion efficiencies per surface type
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SurfaceEfficiencies {
    /// Rooftop panels
    pub rooftop: f64,
    /// Building-integrated photovoltaics on the facade
    pub bipv: f64,
}

impl Default for SurfaceEfficiencies {
    fn default() -> Self {
        Self {
            rooftop: 0.18,
            bipv: 0.12,
        }
    }
}

/// Estimated harvest per surface, in the irradiance's energy unit
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SurfacePotential {
    pub rooftop: f64,
    pub bipv: f64,
}

fn positive(field: &'static str, value: f64) -> Result<f64> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(Error::InvalidParameter {
            field,
            reason: format!("{value} must be positive"),
        })
    }
}

/// Estimate rooftop and BIPV potential for a box-shaped building.
///
/// rooftop = length·breadth · irradiance · η_rooftop · |cos θ|;
/// BIPV uses one facade, height·breadth.
pub fn estimate_surface_potential(
    dims: &SurfaceDimensions,
    site: &Site,
    timestamp: &str,
    irradiance: f64,
    efficiencies: &SurfaceEfficiencies,
) -> Result<SurfacePotential> {
    let length = positive("length", dims.length)?;
    let breadth = positive("breadth", dims.breadth)?;
    let height = positive("height", dims.height)?;

    let at = parse_timestamp(timestamp)?;
    let solar = SolarConfig {
        declination: DeclinationModel::SineDay284,
        longitude_correction: true,
    };
    let factor = illumination(site, at, &solar, IlluminationMode::Absolute);
    debug!(illumination = factor, "estimating surface potential");

    let rooftop = face_potentials(
        &[length * breadth],
        &PotentialParams {
            irradiance,
            efficiency: efficiencies.rooftop,
            illumination: factor,
        },
    )?[0];
    let bipv = face_potentials(
        &[height * breadth],
        &PotentialParams {
            irradiance,
            efficiency: efficiencies.bipv,
            illumination: factor,
        },
    )?[0];

    Ok(SurfacePotential { rooftop, bipv })
}
