// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # SolMap Core
//!
//! Line-oriented Wavefront OBJ parsing and rewriting, plus MTL material
//! library generation. This crate is the file-format layer of the solar
//! heat-map pipeline: it knows how to read vertex/face directives, how to
//! emit material libraries, and how to re-emit an OBJ stream with per-face
//! material annotations. It knows nothing about areas, sun angles or
//! potentials.
//!
//! ## Quick Start
//!
//! ```rust
//! use solmap_core::{parse_obj, MaterialLibrary};
//!
//! let source = "v 0.0 0.0 0.0\nv 1.0 0.0 0.0\nv 1.0 0.0 1.0\nf 1 2 3\n";
//! let mesh = parse_obj(source).unwrap();
//! assert_eq!(mesh.vertex_count(), 3);
//! assert_eq!(mesh.face_count(), 1);
//!
//! let library = MaterialLibrary::from_palette(&["#FFD700"]).unwrap();
//! assert_eq!(library.material_names(), vec!["color_0", "black_border"]);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization support for the mesh data model

pub mod annotate;
pub mod error;
pub mod model;
pub mod mtl;
pub mod parser;

pub use annotate::annotate_obj;
pub use error::{Error, Result};
pub use model::{Face, ObjMesh, Vertex};
pub use mtl::{parse_hex_color, MaterialLibrary, Rgb, BORDER_MATERIAL};
pub use parser::parse_obj;
