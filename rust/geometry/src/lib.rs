// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # SolMap Geometry
//!
//! Numeric stages of the heat-map pipeline: projected polygon areas,
//! degenerate-area substitution, per-face potential estimation and band
//! classification. Works on the mesh data model from `solmap-core`.

pub mod area;
pub mod bands;
pub mod error;
pub mod potential;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};

pub use area::{face_areas, polygon_area_xz, substitute_degenerate_areas};
pub use bands::BandScale;
pub use error::{Error, Result};
pub use potential::{face_potentials, PotentialParams};
