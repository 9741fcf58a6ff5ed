// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end pipeline tests over a small roof mesh.

use solmap_processing::{render_heat_map, Error, HeatMapConfig};
use solmap_solar::Site;

/// Two unit right triangles in the xz plane, area 0.5 each
const TWO_TRIANGLES: &str = "\
o roof
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 1.0 0.0 1.0
v 0.0 0.0 1.0
f 1 2 3
f 1 3 4
";

fn config() -> HeatMapConfig {
    HeatMapConfig::new(Site::new(23.030357, 72.517845), 5.0)
}

// Noon near the summer solstice: sun almost overhead at this latitude
const NOON: &str = "2024-06-21 12:00:00";

#[test]
fn equal_faces_land_in_the_same_band() {
    let output = render_heat_map(TWO_TRIANGLES, NOON, &config()).unwrap();

    assert_eq!(output.summary.face_count, 2);
    assert!(output.summary.illumination > 0.99);

    // area 0.5 · irradiance 5.0 · efficiency 0.15 · illumination
    let expected = 0.5 * 5.0 * 0.15 * output.summary.illumination;
    assert!((output.summary.min_potential - expected).abs() < 1e-12);
    assert_eq!(output.summary.min_potential, output.summary.max_potential);

    // Equal potentials collapse to band 0
    assert_eq!(output.obj.matches("usemtl color_0\n").count(), 2);
}

#[test]
fn annotated_obj_structure() {
    let output = render_heat_map(TWO_TRIANGLES, NOON, &config()).unwrap();
    let obj = &output.obj;

    assert!(obj.starts_with("mtllib heatmap.mtl\n"));

    // One usemtl directly before each of the two face lines
    let lines: Vec<&str> = obj.lines().collect();
    for face in ["f 1 2 3", "f 1 3 4"] {
        let at = lines.iter().position(|l| *l == face).unwrap();
        assert!(lines[at - 1].starts_with("usemtl color_"), "before {face}");
    }

    // Original lines preserved
    assert!(obj.contains("o roof\n"));
    assert!(obj.contains("v 1.0 0.0 1.0\n"));

    // 3 border edges per triangle, appended after the original content
    assert_eq!(obj.matches("usemtl black_border\n").count(), 6);
    let first_border = obj.find("usemtl black_border").unwrap();
    let last_face = obj.find("f 1 3 4").unwrap();
    assert!(first_border > last_face);
}

#[test]
fn mtl_has_palette_plus_border() {
    let output = render_heat_map(TWO_TRIANGLES, NOON, &config()).unwrap();

    assert_eq!(output.mtl.matches("newmtl ").count(), 16);
    assert!(output.mtl.contains("newmtl color_0\n"));
    assert!(output.mtl.contains("newmtl color_14\n"));
    assert!(output.mtl.ends_with("newmtl black_border\nKd 0.0000 0.0000 0.0000\n"));
}

#[test]
fn identical_inputs_give_identical_bytes() {
    let first = render_heat_map(TWO_TRIANGLES, NOON, &config()).unwrap();
    let second = render_heat_map(TWO_TRIANGLES, NOON, &config()).unwrap();
    assert_eq!(first.obj, second.obj);
    assert_eq!(first.mtl, second.mtl);
}

#[test]
fn degenerate_face_gets_the_mean_area() {
    // Third face is a zero-area sliver; it inherits the mean of the others
    let source = "\
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 1.0 0.0 1.0
v 0.0 0.0 1.0
f 1 2 3 4
f 1 2 3
f 1 2 2
";
    let output = render_heat_map(source, NOON, &config()).unwrap();
    assert_eq!(output.summary.face_count, 3);

    // Areas 1.0, 0.5 and mean(1.0, 0.5) = 0.75; the sliver sits strictly
    // between the other two potentials
    let unit = 5.0 * 0.15 * output.summary.illumination;
    assert!((output.summary.max_potential - 1.0 * unit).abs() < 1e-12);
    assert!((output.summary.min_potential - 0.5 * unit).abs() < 1e-12);
    assert!((output.summary.total_potential - 2.25 * unit).abs() < 1e-12);
}

#[test]
fn night_run_collapses_to_the_lowest_band() {
    let output = render_heat_map(TWO_TRIANGLES, "2024-06-21 00:30:00", &config()).unwrap();
    assert_eq!(output.summary.illumination, 0.0);
    assert_eq!(output.summary.max_potential, 0.0);
    assert_eq!(output.obj.matches("usemtl color_0\n").count(), 2);
}

#[test]
fn invalid_timestamp_fails_without_output() {
    let err = render_heat_map(TWO_TRIANGLES, "not-a-date", &config()).unwrap_err();
    assert!(matches!(err, Error::Solar(_)));
}

#[test]
fn empty_mesh_is_rejected() {
    let err = render_heat_map("o nothing\n", NOON, &config()).unwrap_err();
    assert!(matches!(err, Error::Geometry(_)));
}

#[test]
fn custom_palette_drives_band_count() {
    let mut cfg = config();
    cfg.palette = vec!["#112233".to_string(), "#445566".to_string()];
    let output = render_heat_map(TWO_TRIANGLES, NOON, &cfg).unwrap();
    assert_eq!(output.mtl.matches("newmtl ").count(), 3);
}
