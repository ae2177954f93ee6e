//! MeshError: unified error type for tet-adjacency public APIs
//!
//! Every validation failure during mesh construction is fatal and surfaces as
//! one of these variants, carrying the offending indices and labels.

use thiserror::Error;

/// Unified error type for mesh ingestion and consolidation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// The reader reported a format version or spatial dimension we cannot handle.
    #[error("Incompatible mesh: version {version}, dimension {dimension} (expected version 2, dimension 3)")]
    IncompatibleMesh { version: i32, dimension: i32 },
    /// Two tetrahedra produced the same oriented face.
    #[error("Duplicate face {face:?}; tetrahedron orientation may be inconsistent")]
    DuplicateFace { face: [usize; 3] },
    /// A boundary triangle does not match the tetrahedron-implied faces.
    #[error(
        "Tetrahedron faces and boundary triangle {vertices:?} (label {label}) orientation mismatch: forward present = {forward}, flipped present = {flipped}"
    )]
    OrientationMismatch {
        vertices: [usize; 3],
        label: i32,
        forward: bool,
        flipped: bool,
    },
    /// The two orientations of a face ended up with different labels.
    #[error("Label {label:?} of face {face:?} does not match label {flipped_label:?} of its flip")]
    LabelMismatch {
        face: [usize; 3],
        label: Option<i32>,
        flipped_label: Option<i32>,
    },
    /// The same tetrahedron lies on both sides of a face.
    #[error("Face {face:?} has element {element} on both sides")]
    DegenerateFace { face: [usize; 3], element: usize },
    /// A face has no reverse-oriented partner in the adjacency table.
    #[error("Face {face:?} has no flipped partner; boundary triangle missing?")]
    MissingFlip { face: [usize; 3] },
    /// A tetrahedron face was never closed by a boundary triangle or a neighbour.
    #[error("Face {face:?} of element {element:?} is neither shared nor covered by a boundary triangle")]
    MissingBoundaryTriangle {
        face: [usize; 3],
        element: Option<usize>,
    },
    /// A triangle names the same vertex more than once.
    #[error("Degenerate triangle {vertices:?}: repeated vertex")]
    DegenerateTriangle { vertices: [usize; 3] },
    /// A tetrahedron names the same vertex more than once.
    #[error("Degenerate tetrahedron {element} {vertices:?}: repeated vertex")]
    DegenerateTetrahedron { element: usize, vertices: [usize; 4] },
    /// A 1-based vertex index outside `1..=count`.
    #[error("Vertex index {index} out of range (mesh has {count} vertices)")]
    VertexOutOfRange { index: i64, count: usize },
    /// Malformed mesh input or misuse of a record source.
    #[error("Mesh I/O parse error: {0}")]
    MeshIoParse(String),
    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for MeshError {
    fn from(err: std::io::Error) -> Self {
        MeshError::Io(err.to_string())
    }
}
