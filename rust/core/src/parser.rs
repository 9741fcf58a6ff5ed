// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Line-oriented OBJ parser
//!
//! Extracts `v` and `f` directives; everything else is passed over and
//! re-emitted verbatim by the annotator. Coordinates go through
//! [fast-float](https://docs.rs/fast-float), face vertex specs through a
//! small [nom](https://docs.rs/nom) grammar.

use nom::{
    character::complete::digit1,
    combinator::{all_consuming, map_res},
    IResult,
};

use crate::error::{Error, Result};
use crate::model::{Face, ObjMesh, Vertex};

/// Parse the 1-based vertex index at the start of a face vertex spec
fn vertex_index(input: &str) -> IResult<&str, u32> {
    map_res(digit1, |s: &str| s.parse::<u32>())(input)
}

/// Parse the payload of a `v` directive: three whitespace-separated floats.
/// Trailing fields (an optional `w`) are ignored.
fn parse_vertex(payload: &str, line: usize) -> Result<Vertex> {
    let bytes = payload.as_bytes();
    let mut coords = [0.0f64; 3];
    let mut pos = 0;

    for coord in coords.iter_mut() {
        while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
            pos += 1;
        }
        let (value, consumed) = fast_float::parse_partial::<f64, _>(&bytes[pos..])
            .map_err(|_| Error::InvalidVertex { line })?;
        *coord = value;
        pos += consumed;
    }

    Ok(Vertex::new(coords[0], coords[1], coords[2]))
}

/// Parse one face vertex spec (`7`, `7/2`, `7//3`, `7/2/3`) down to its
/// 0-based vertex index. Texture and normal references are ignored.
fn face_vertex(token: &str, line: usize) -> Result<u32> {
    let prefix = match memchr::memchr(b'/', token.as_bytes()) {
        Some(slash) => &token[..slash],
        None => token,
    };

    let invalid = || Error::InvalidFaceIndex {
        line,
        token: token.to_string(),
    };

    let (_, index) =
        all_consuming(vertex_index)(prefix).map_err(|_: nom::Err<nom::error::Error<&str>>| invalid())?;

    // Vertex numbering starts at 1; 0 never references anything.
    index.checked_sub(1).ok_or_else(invalid)
}

/// Parse the payload of an `f` directive into a face index ring
fn parse_face(payload: &str, line: usize) -> Result<Face> {
    let mut face = Face::default();
    for token in payload.split_whitespace() {
        face.indices.push(face_vertex(token, line)?);
    }
    Ok(face)
}

/// Parse OBJ text into a mesh.
///
/// Fails with a line-numbered error when a `v` directive lacks three numeric
/// coordinates, when an `f` directive carries a non-numeric vertex index, or
/// when a face references a vertex that does not exist.
pub fn parse_obj(source: &str) -> Result<ObjMesh> {
    let mut mesh = ObjMesh::new();
    let mut face_lines = Vec::new();

    for (idx, line) in source.lines().enumerate() {
        let line_no = idx + 1;
        if let Some(payload) = line.strip_prefix("v ") {
            mesh.vertices.push(parse_vertex(payload, line_no)?);
        } else if let Some(payload) = line.strip_prefix("f ") {
            mesh.faces.push(parse_face(payload, line_no)?);
            face_lines.push(line_no);
        }
    }

    // Rings may only reference vertices that actually exist.
    let vertex_count = mesh.vertex_count();
    for (face, &line) in mesh.faces.iter().zip(&face_lines) {
        for &index in &face.indices {
            if index as usize >= vertex_count {
                return Err(Error::IndexOutOfRange {
                    line,
                    index: index as usize + 1,
                    vertex_count,
                });
            }
        }
    }

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: &str = "\
# unit square in the xz plane
o roof
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 1.0 0.0 1.0
v 0.0 0.0 1.0
f 1 2 3 4
";

    #[test]
    fn test_parse_square() {
        let mesh = parse_obj(SQUARE).unwrap();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.face_count(), 1);
        assert_eq!(mesh.vertices[2], Vertex::new(1.0, 0.0, 1.0));
        assert_eq!(mesh.faces[0].indices.as_slice(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_face_specs_with_slashes() {
        let source = "v 0 0 0\nv 1 0 0\nv 0 0 1\nf 1/5 2//7 3/5/7\n";
        let mesh = parse_obj(source).unwrap();
        assert_eq!(mesh.faces[0].indices.as_slice(), &[0, 1, 2]);
    }

    #[test]
    fn test_negative_coordinates_and_exponents() {
        let source = "v -1.5 2.25e-1 -3\n";
        let mesh = parse_obj(source).unwrap();
        assert_eq!(mesh.vertices[0], Vertex::new(-1.5, 0.225, -3.0));
    }

    #[test]
    fn test_other_directives_ignored() {
        let source = "vt 0.5 0.5\nvn 0.0 1.0 0.0\ns off\nusemtl old\n";
        let mesh = parse_obj(source).unwrap();
        assert!(mesh.is_empty());
    }

    #[test]
    fn test_short_vertex_line_fails() {
        let err = parse_obj("v 1.0 2.0\n").unwrap_err();
        assert!(matches!(err, Error::InvalidVertex { line: 1 }));
    }

    #[test]
    fn test_non_numeric_vertex_fails() {
        let err = parse_obj("o thing\nv 1.0 two 3.0\n").unwrap_err();
        assert!(matches!(err, Error::InvalidVertex { line: 2 }));
    }

    #[test]
    fn test_non_numeric_face_index_fails() {
        let err = parse_obj("v 0 0 0\nf 1 x 1\n").unwrap_err();
        match err {
            Error::InvalidFaceIndex { line, token } => {
                assert_eq!(line, 2);
                assert_eq!(token, "x");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_zero_index_fails() {
        let err = parse_obj("v 0 0 0\nf 0 1 1\n").unwrap_err();
        assert!(matches!(err, Error::InvalidFaceIndex { line: 2, .. }));
    }

    #[test]
    fn test_out_of_range_index_fails() {
        let err = parse_obj("v 0 0 0\nv 1 0 0\nf 1 2 3\n").unwrap_err();
        match err {
            Error::IndexOutOfRange {
                line,
                index,
                vertex_count,
            } => {
                assert_eq!(line, 3);
                assert_eq!(index, 3);
                assert_eq!(vertex_count, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
