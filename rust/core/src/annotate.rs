// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Streaming OBJ annotation
//!
//! Re-emits the original mesh text once, inserting a `usemtl` directive
//! before every face line and appending synthesized border edges after the
//! original content. Read once, write once; no random-access edits.

use std::fmt::Write as _;

use crate::error::{Error, Result};
use crate::model::Face;
use crate::mtl::BORDER_MATERIAL;

/// Rewrite OBJ text with per-face material annotations.
///
/// `bands` holds one material index per face line, in file order, and
/// `materials` is the band-ordered name list (border last). The output
/// starts with a `mtllib` reference, streams every original line unchanged
/// except for the inserted `usemtl` directives, then appends one degenerate
/// border triangle per face edge (`f a b b`, 1-based) so viewers render the
/// face outlines. Line endings are normalized to `\n`.
pub fn annotate_obj(
    source: &str,
    faces: &[Face],
    bands: &[usize],
    materials: &[String],
    mtl_name: &str,
) -> Result<String> {
    // Annotations roughly double the face section; leave headroom.
    let mut out = String::with_capacity(source.len() * 2 + 64);
    let _ = writeln!(out, "mtllib {mtl_name}");

    let mut face_index = 0usize;
    for line in source.lines() {
        if line.starts_with("f ") {
            let band = *bands.get(face_index).ok_or(Error::FaceCountMismatch {
                expected: bands.len(),
                found: face_index + 1,
            })?;
            let material = materials.get(band).ok_or(Error::MaterialOutOfRange {
                index: band,
                count: materials.len(),
            })?;
            let _ = writeln!(out, "usemtl {material}");
            face_index += 1;
        }
        out.push_str(line);
        out.push('\n');
    }

    if face_index != bands.len() {
        return Err(Error::FaceCountMismatch {
            expected: bands.len(),
            found: face_index,
        });
    }

    // Border pass: a zero-area triangle per edge, repeating the second
    // vertex, renders as a thin outline in face-shading viewers.
    for face in faces {
        for (a, b) in face.edges() {
            let _ = writeln!(out, "usemtl {BORDER_MATERIAL}");
            let _ = writeln!(out, "f {} {} {}", a + 1, b + 1, b + 1);
        }
    }

    Ok(out)
}
