// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Projected polygon areas
//!
//! Face area is computed on the x/z plane (the mesh seen from above along
//! the y axis) with the shoelace formula. Valid for near-horizontal faces;
//! a true normal-based 3D area is deliberately not attempted.

use nalgebra::Point3;
use solmap_core::ObjMesh;

use crate::error::{Error, Result};

/// Shoelace area of a polygon projected onto the x/z plane.
///
/// Returns 0 for rings with fewer than 3 points and for collinear input.
#[inline]
pub fn polygon_area_xz(points: &[Point3<f64>]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }

    let n = points.len();
    let mut acc = 0.0;
    for i in 0..n {
        let p = &points[i];
        let q = &points[(i + 1) % n];
        acc += p.x * q.z - p.z * q.x;
    }
    0.5 * acc.abs()
}

/// Projected area of every face in the mesh, in face order
pub fn face_areas(mesh: &ObjMesh) -> Vec<f64> {
    mesh.faces
        .iter()
        .map(|face| {
            let ring: Vec<Point3<f64>> = mesh
                .face_vertices(face)
                .map(|v| Point3::new(v.x, v.y, v.z))
                .collect();
            polygon_area_xz(&ring)
        })
        .collect()
}

/// Replace every non-positive area with the mean of the strictly positive
/// ones.
///
/// Degenerate faces (zero projected area, or fewer than 3 vertices) would
/// otherwise vanish from the heat map; giving them the mesh-average area
/// keeps them colored. Fails when substitution is needed but the mesh has
/// no positive area to average. Idempotent: a second pass finds nothing
/// left to substitute.
pub fn substitute_degenerate_areas(areas: &mut [f64]) -> Result<()> {
    if areas.iter().all(|&a| a > 0.0) {
        return Ok(());
    }

    let positive: Vec<f64> = areas.iter().copied().filter(|&a| a > 0.0).collect();
    if positive.is_empty() {
        return Err(Error::EmptyInput(
            "mesh has no face with positive area".to_string(),
        ));
    }

    let mean = positive.iter().sum::<f64>() / positive.len() as f64;
    for area in areas.iter_mut() {
        if *area <= 0.0 {
            *area = mean;
        }
    }
    Ok(())
}
