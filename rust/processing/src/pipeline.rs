// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Heat-map pipeline
//!
//! Parser → areas → mean substitution → illumination → potentials → bands →
//! materials → annotated OBJ. Data flows strictly forward; a failure at any
//! stage surfaces as an error with nothing written.

use serde::Serialize;
use tracing::debug;

use solmap_core::{annotate_obj, parse_obj, MaterialLibrary};
use solmap_geometry::{
    face_areas, face_potentials, substitute_degenerate_areas, BandScale, PotentialParams,
};
use solmap_solar::{illumination, parse_timestamp, IlluminationMode};

use crate::config::HeatMapConfig;
use crate::error::Result;

/// Numeric side-channel of a heat-map run
#[derive(Debug, Clone, Serialize)]
pub struct HeatMapSummary {
    pub face_count: usize,
    pub illumination: f64,
    pub min_potential: f64,
    pub max_potential: f64,
    pub total_potential: f64,
}

/// The two generated files plus the run summary
#[derive(Debug, Clone)]
pub struct HeatMapOutput {
    /// Annotated mesh, same line format as the input
    pub obj: String,
    /// Matching material library
    pub mtl: String,
    pub summary: HeatMapSummary,
}

/// Run the full heat-map transform.
///
/// Pure: identical inputs yield byte-identical outputs, and nothing outside
/// the returned value is touched.
pub fn render_heat_map(
    obj_source: &str,
    timestamp: &str,
    config: &HeatMapConfig,
) -> Result<HeatMapOutput> {
    config.validate()?;
    let at = parse_timestamp(timestamp)?;

    let mesh = parse_obj(obj_source)?;
    debug!(
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        "parsed mesh"
    );

    let mut areas = face_areas(&mesh);
    substitute_degenerate_areas(&mut areas)?;

    let factor = illumination(
        &config.site,
        at,
        &config.solar,
        IlluminationMode::ClampNight,
    );
    debug!(illumination = factor, "computed solar geometry");

    let params = PotentialParams {
        irradiance: config.irradiance,
        efficiency: config.efficiency,
        illumination: factor,
    };
    let potentials = face_potentials(&areas, &params)?;

    let scale = BandScale::from_potentials(&potentials, config.palette.len())?;
    let bands = scale.classify(&potentials);

    let library = MaterialLibrary::from_palette(&config.palette)?;
    let materials = library.material_names();
    let obj = annotate_obj(obj_source, &mesh.faces, &bands, &materials, &config.mtl_name)?;
    let mtl = library.to_mtl_string();

    let (mut min, mut max, mut total) = (f64::INFINITY, f64::NEG_INFINITY, 0.0);
    for &p in &potentials {
        min = min.min(p);
        max = max.max(p);
        total += p;
    }
    debug!(min, max, total, "classified potentials");

    Ok(HeatMapOutput {
        obj,
        mtl,
        summary: HeatMapSummary {
            face_count: mesh.face_count(),
            illumination: factor,
            min_potential: min,
            max_potential: max,
            total_potential: total,
        },
    })
}
