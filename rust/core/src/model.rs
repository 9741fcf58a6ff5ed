// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mesh data structures

use smallvec::SmallVec;

/// A single model-space coordinate triple.
///
/// Vertices are referenced by their 1-based position in the source file;
/// internally everything is 0-based.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vertex {
    /// Create a new vertex
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Ordered ring of 0-based vertex indices forming one polygon.
///
/// Most faces are triangles or quads, so the ring lives on the stack.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Face {
    pub indices: SmallVec<[u32; 8]>,
}

impl Face {
    /// Create a face from 0-based vertex indices
    pub fn new(indices: impl IntoIterator<Item = u32>) -> Self {
        Self {
            indices: indices.into_iter().collect(),
        }
    }

    /// Number of vertices in the ring
    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// True when the ring holds no indices
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Iterate over the ring's consecutive edges, including the closing
    /// wrap-around edge from the last vertex back to the first.
    pub fn edges(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let n = self.indices.len();
        (0..n).map(move |i| (self.indices[i], self.indices[(i + 1) % n]))
    }
}

/// Parsed mesh: vertex list plus polygonal faces.
///
/// Only `v` and `f` directives are extracted; every other source line is
/// left to the annotator, which re-reads the original text verbatim.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjMesh {
    pub vertices: Vec<Vertex>,
    pub faces: Vec<Face>,
}

impl ObjMesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mesh with capacity
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Number of vertices
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of faces
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// True when the mesh holds no geometry at all
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.faces.is_empty()
    }

    /// Resolve a face's ring to vertex coordinates, in ring order
    pub fn face_vertices<'a>(&'a self, face: &'a Face) -> impl Iterator<Item = Vertex> + 'a {
        face.indices.iter().map(|&i| self.vertices[i as usize])
    }
}
