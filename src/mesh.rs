//! Tetrahedral mesh with reconstructed face adjacency.
//!
//! [`MeshBuilder`] pulls records from a [`MeshRecordSource`] in four strictly
//! sequential phases:
//!
//! 1. vertices are copied into the point list;
//! 2. every tetrahedron registers its four oriented faces in an
//!    [`AdjacencyTable`]; a face key seen twice means two elements claim the
//!    same side of a triangle;
//! 3. every boundary triangle is classified against the table as an outer
//!    boundary (only its flip is owned by a tetrahedron) or a slit (both
//!    orientations are owned); anything else is an orientation mismatch;
//! 4. the table is consolidated into one [`Face`] per geometric triangle.
//!
//! The builder either returns a fully validated [`TetMesh`] or the first
//! [`MeshError`] it hits.

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::io::gmf::GmfReader;
use crate::io::{MeshRecordSource, RecordKind};
use crate::mesh_error::MeshError;
use crate::topology::adjacency::{AdjacencyTable, FaceProperty};
use crate::topology::face::{Face, FaceKind};
use crate::topology::face_key::FaceKey;

/// Only GMF version 2 (double precision, 32-bit indices) in 3-D is accepted.
pub const SUPPORTED_VERSION: i32 = 2;
pub const SUPPORTED_DIMENSION: i32 = 3;

/// Upper bound on records preallocated from a source's declared count.
const PREALLOC_LIMIT: usize = 1 << 16;

/// Options controlling mesh construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildOptions {
    /// Declares that source indices are 1-based.
    ///
    /// Source indices are always converted from 1-based to 0-based; this
    /// flag is accepted for compatibility and does not change the result.
    pub fortran_numbering: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            fortran_numbering: true,
        }
    }
}

/// A mesh vertex.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl From<[f64; 3]> for Point {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self { x, y, z }
    }
}

/// A labelled tetrahedron. Vertex order defines its four oriented faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tetrahedron {
    pub vertices: [usize; 4],
    pub label: i32,
}

impl Tetrahedron {
    /// The four oriented faces, all consistently oriented for this element.
    pub fn face_keys(&self) -> [FaceKey; 4] {
        let [v0, v1, v2, v3] = self.vertices;
        [
            FaceKey::new(v0, v1, v2),
            FaceKey::new(v1, v0, v3),
            FaceKey::new(v2, v3, v0),
            FaceKey::new(v3, v2, v1),
        ]
    }
}

/// Record counts of a built mesh.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeshSummary {
    pub vertices: usize,
    pub tetrahedra: usize,
    pub boundary_triangles: usize,
    pub faces: usize,
}

/// Validated tetrahedral mesh. Immutable once built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TetMesh {
    points: Vec<Point>,
    tetrahedra: Vec<Tetrahedron>,
    faces: Vec<Face>,
    boundary_triangles: usize,
}

impl TetMesh {
    /// Builds a mesh from any record source.
    pub fn from_source<S: MeshRecordSource>(
        source: &mut S,
        options: BuildOptions,
    ) -> Result<Self, MeshError> {
        MeshBuilder::new(options).build(source)
    }

    /// Parses an ASCII GMF mesh from `reader` and builds it.
    pub fn read<R: Read>(reader: R, options: BuildOptions) -> Result<Self, MeshError> {
        let mut source = GmfReader.read(reader)?;
        Self::from_source(&mut source, options)
    }

    /// Opens the ASCII GMF mesh at `path` and builds it.
    pub fn open<P: AsRef<Path>>(path: P, options: BuildOptions) -> Result<Self, MeshError> {
        let mut source = GmfReader.open(path)?;
        Self::from_source(&mut source, options)
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn tetrahedra(&self) -> &[Tetrahedron] {
        &self.tetrahedra
    }

    /// All faces, sorted by canonical vertex triple.
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn boundary_faces(&self) -> impl Iterator<Item = &Face> + '_ {
        self.faces_of_kind(FaceKind::Boundary)
    }

    pub fn interior_faces(&self) -> impl Iterator<Item = &Face> + '_ {
        self.faces_of_kind(FaceKind::Interior)
    }

    pub fn slit_faces(&self) -> impl Iterator<Item = &Face> + '_ {
        self.faces_of_kind(FaceKind::Slit)
    }

    fn faces_of_kind(&self, kind: FaceKind) -> impl Iterator<Item = &Face> + '_ {
        self.faces.iter().filter(move |f| f.kind() == kind)
    }

    pub fn summary(&self) -> MeshSummary {
        MeshSummary {
            vertices: self.points.len(),
            tetrahedra: self.tetrahedra.len(),
            boundary_triangles: self.boundary_triangles,
            faces: self.faces.len(),
        }
    }
}

/// Drives the ingestion phases against a record source.
#[derive(Clone, Debug, Default)]
pub struct MeshBuilder {
    options: BuildOptions,
}

impl MeshBuilder {
    pub fn new(options: BuildOptions) -> Self {
        Self { options }
    }

    /// Runs all phases and returns the validated mesh.
    ///
    /// # Errors
    /// [`MeshError::IncompatibleMesh`] before anything is read if the source
    /// is not version 2 / dimension 3, otherwise the first ingestion or
    /// consolidation error.
    pub fn build<S: MeshRecordSource>(&self, source: &mut S) -> Result<TetMesh, MeshError> {
        let (version, dimension) = (source.version(), source.dimension());
        if version != SUPPORTED_VERSION || dimension != SUPPORTED_DIMENSION {
            return Err(MeshError::IncompatibleMesh { version, dimension });
        }

        log::debug!("building mesh with {:?}", self.options);
        let points = Self::read_vertices(source)?;
        let (tetrahedra, mut table) = Self::read_tetrahedra(source, points.len())?;
        let boundary_triangles = Self::read_boundary(source, points.len(), &mut table)?;
        let faces = table.consolidate()?;
        log::debug!("consolidated {} table entries into {} faces", table.len(), faces.len());

        let mesh = TetMesh {
            points,
            tetrahedra,
            faces,
            boundary_triangles,
        };
        log::info!("built tetrahedral mesh: {:?}", mesh.summary());
        Ok(mesh)
    }

    fn read_vertices<S: MeshRecordSource>(source: &mut S) -> Result<Vec<Point>, MeshError> {
        let count = source.count(RecordKind::Vertices);
        source.goto(RecordKind::Vertices)?;
        let mut points = Vec::with_capacity(count.min(PREALLOC_LIMIT));
        for _ in 0..count {
            let (coords, _label) = source.next_vertex()?;
            points.push(Point::from(coords));
        }
        log::debug!("read {count} vertices");
        Ok(points)
    }

    fn read_tetrahedra<S: MeshRecordSource>(
        source: &mut S,
        point_count: usize,
    ) -> Result<(Vec<Tetrahedron>, AdjacencyTable), MeshError> {
        let count = source.count(RecordKind::Tetrahedra);
        if count == 0 {
            log::warn!("mesh declares no tetrahedra");
        }
        source.goto(RecordKind::Tetrahedra)?;
        let mut tetrahedra = Vec::with_capacity(count.min(PREALLOC_LIMIT));
        let mut table = AdjacencyTable::with_tetrahedra(count.min(PREALLOC_LIMIT));
        for element in 0..count {
            let (raw, label) = source.next_tetrahedron()?;
            let mut vertices = [0usize; 4];
            for (v, &r) in vertices.iter_mut().zip(&raw) {
                *v = to_zero_based(r, point_count)?;
            }
            if has_repeats(&vertices) {
                return Err(MeshError::DegenerateTetrahedron { element, vertices });
            }
            let tet = Tetrahedron { vertices, label };
            for key in tet.face_keys() {
                table.insert_unique(key, FaceProperty::owned_by(element))?;
            }
            tetrahedra.push(tet);
        }
        log::debug!("read {count} tetrahedra, {} oriented faces", table.len());
        Ok((tetrahedra, table))
    }

    fn read_boundary<S: MeshRecordSource>(
        source: &mut S,
        point_count: usize,
        table: &mut AdjacencyTable,
    ) -> Result<usize, MeshError> {
        let count = source.count(RecordKind::Triangles);
        source.goto(RecordKind::Triangles)?;
        let (mut outer, mut slit) = (0usize, 0usize);
        for _ in 0..count {
            let (raw, label) = source.next_triangle()?;
            let v0 = to_zero_based(raw[0], point_count)?;
            let v1 = to_zero_based(raw[1], point_count)?;
            let v2 = to_zero_based(raw[2], point_count)?;
            let forward = FaceKey::try_new(v0, v1, v2)?;
            let flipped = forward.flip();

            match (table.contains(&forward), table.contains(&flipped)) {
                (false, true) => {
                    table.insert_unique(forward, FaceProperty::outside(label))?;
                    table.set_label(&flipped, label)?;
                    outer += 1;
                }
                (true, true) => {
                    table.set_label(&forward, label)?;
                    table.set_label(&flipped, label)?;
                    slit += 1;
                }
                (forward_present, flipped_present) => {
                    return Err(MeshError::OrientationMismatch {
                        vertices: [v0, v1, v2],
                        label,
                        forward: forward_present,
                        flipped: flipped_present,
                    });
                }
            }
        }
        log::debug!("read {count} boundary triangles ({outer} outer, {slit} slit)");
        Ok(count)
    }
}

/// Converts a 1-based source index into a checked 0-based one.
fn to_zero_based(raw: i64, point_count: usize) -> Result<usize, MeshError> {
    match raw.checked_sub(1).and_then(|r| usize::try_from(r).ok()) {
        Some(idx) if idx < point_count => Ok(idx),
        _ => Err(MeshError::VertexOutOfRange {
            index: raw,
            count: point_count,
        }),
    }
}

fn has_repeats(vertices: &[usize; 4]) -> bool {
    (0..4).any(|i| (i + 1..4).any(|j| vertices[i] == vertices[j]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_based_conversion_checks_range() {
        assert_eq!(to_zero_based(1, 4), Ok(0));
        assert_eq!(to_zero_based(4, 4), Ok(3));
        assert_eq!(
            to_zero_based(0, 4),
            Err(MeshError::VertexOutOfRange { index: 0, count: 4 })
        );
        assert!(to_zero_based(5, 4).is_err());
        assert!(to_zero_based(-3, 4).is_err());
    }

    #[test]
    fn tetrahedron_faces_follow_fixed_pattern() {
        let tet = Tetrahedron {
            vertices: [0, 1, 2, 3],
            label: 1,
        };
        assert_eq!(
            tet.face_keys(),
            [
                FaceKey::new(0, 1, 2),
                FaceKey::new(1, 0, 3),
                FaceKey::new(2, 3, 0),
                FaceKey::new(3, 2, 1),
            ]
        );
    }

    #[test]
    fn repeated_vertices_detected() {
        assert!(has_repeats(&[0, 1, 2, 0]));
        assert!(has_repeats(&[0, 2, 2, 3]));
        assert!(!has_repeats(&[3, 1, 2, 0]));
    }
}
