//! # tet-adjacency
//!
//! tet-adjacency reconstructs the face adjacency of a labelled tetrahedral
//! volume mesh: for every distinct triangle it records which tetrahedra lie on
//! either side and which boundary label, if any, applies.
//!
//! ## Features
//! - Canonical, orientation-aware triangle keys ([`topology::face_key::FaceKey`])
//! - Duplicate and orientation-consistency checks across all tetrahedra
//! - Reconciliation of boundary triangles, including slit boundaries that carry
//!   a label while having tetrahedra on both sides
//! - ASCII GMF (`.mesh`) input and legacy VTK output
//!
//! ## Usage
//!
//! ```rust
//! use tet_adjacency::prelude::*;
//!
//! let mut source = MemorySource::default();
//! for p in [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]] {
//!     source.push_vertex(p, 0);
//! }
//! source.push_tetrahedron([1, 2, 3, 4], 1);
//! for (tri, lab) in [([3, 2, 1], 10), ([4, 1, 2], 11), ([1, 4, 3], 12), ([2, 3, 4], 13)] {
//!     source.push_triangle(tri, lab);
//! }
//!
//! let mesh = TetMesh::from_source(&mut source, BuildOptions::default()).unwrap();
//! assert_eq!(mesh.faces().len(), 4);
//! assert_eq!(mesh.boundary_faces().count(), 4);
//! ```
//!
//! ## Logging
//! Progress is reported through the [`log`] facade; install any logger to see it.

pub mod io;
pub mod mesh;
pub mod mesh_error;
pub mod topology;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::io::gmf::GmfReader;
    pub use crate::io::vtk::{FaceSelection, VtkWriteOptions, VtkWriter};
    pub use crate::io::{MemorySource, MeshRecordSource, RecordKind};
    pub use crate::mesh::{BuildOptions, MeshBuilder, MeshSummary, Point, TetMesh, Tetrahedron};
    pub use crate::mesh_error::MeshError;
    pub use crate::topology::adjacency::{AdjacencyTable, FaceProperty};
    pub use crate::topology::cell_type::CellType;
    pub use crate::topology::face::{Face, FaceKind};
    pub use crate::topology::face_key::FaceKey;
}
