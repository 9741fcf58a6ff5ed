// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # SolMap Processing
//!
//! The pipeline entry points. Callers hand over OBJ text, a timestamp and a
//! configuration; they get back the annotated OBJ, the generated MTL and a
//! numeric summary. Everything is a pure function of its inputs (same mesh,
//! same parameters, byte-identical output), so invocations can run
//! concurrently without coordination.

pub mod config;
pub mod error;
pub mod estimate;
pub mod pipeline;

pub use config::{HeatMapConfig, DEFAULT_PALETTE};
pub use error::{Error, Result};
pub use estimate::{
    estimate_surface_potential, SurfaceDimensions, SurfaceEfficiencies, SurfacePotential,
};
pub use pipeline::{render_heat_map, HeatMapOutput, HeatMapSummary};
