//! Mesh record sources and writers.
//!
//! The builder in [`crate::mesh`] pulls vertices, tetrahedra and boundary
//! triangles from any [`MeshRecordSource`]: a keyed, sequential record reader
//! in the style of the GMF library. Vertex indices handed out by a source are
//! 1-based, as in the file formats.

pub mod gmf;
pub mod vtk;

use crate::mesh_error::MeshError;

/// Record kinds a source can count and position on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Vertices,
    Tetrahedra,
    Triangles,
}

impl RecordKind {
    /// GMF keyword naming this section.
    pub fn keyword(self) -> &'static str {
        match self {
            RecordKind::Vertices => "Vertices",
            RecordKind::Tetrahedra => "Tetrahedra",
            RecordKind::Triangles => "Triangles",
        }
    }
}

/// Vertex record: coordinates and reference label.
pub type VertexRecord = ([f64; 3], i32);
/// Tetrahedron record: 1-based vertex indices and material label.
pub type TetrahedronRecord = ([i64; 4], i32);
/// Triangle record: 1-based vertex indices and boundary label.
pub type TriangleRecord = ([i64; 3], i32);

/// Keyed, sequential access to the records of a mesh description.
///
/// Callers [`goto`](MeshRecordSource::goto) a kind and then fetch exactly
/// [`count`](MeshRecordSource::count) records of it with the matching
/// `next_*` method. Resources are released when the source is dropped.
pub trait MeshRecordSource {
    /// Format version reported by the source.
    fn version(&self) -> i32;
    /// Spatial dimension reported by the source.
    fn dimension(&self) -> i32;
    /// Number of records of `kind`.
    fn count(&self, kind: RecordKind) -> usize;
    /// Positions the cursor of `kind` at its first record.
    fn goto(&mut self, kind: RecordKind) -> Result<(), MeshError>;
    fn next_vertex(&mut self) -> Result<VertexRecord, MeshError>;
    fn next_tetrahedron(&mut self) -> Result<TetrahedronRecord, MeshError>;
    fn next_triangle(&mut self) -> Result<TriangleRecord, MeshError>;
}

/// In-memory record source.
///
/// Useful for meshes produced by another program and for tests. Indices are
/// stored exactly as given, so they must be 1-based.
#[derive(Clone, Debug)]
pub struct MemorySource {
    version: i32,
    dimension: i32,
    vertices: Vec<VertexRecord>,
    tetrahedra: Vec<TetrahedronRecord>,
    triangles: Vec<TriangleRecord>,
    cursors: [Option<usize>; 3],
}

impl Default for MemorySource {
    fn default() -> Self {
        Self::new(2, 3)
    }
}

impl MemorySource {
    /// Empty source reporting the given version and dimension.
    pub fn new(version: i32, dimension: i32) -> Self {
        Self {
            version,
            dimension,
            vertices: Vec::new(),
            tetrahedra: Vec::new(),
            triangles: Vec::new(),
            cursors: [None; 3],
        }
    }

    pub fn push_vertex(&mut self, coords: [f64; 3], label: i32) -> &mut Self {
        self.vertices.push((coords, label));
        self
    }

    pub fn push_tetrahedron(&mut self, vertices: [i64; 4], label: i32) -> &mut Self {
        self.tetrahedra.push((vertices, label));
        self
    }

    pub fn push_triangle(&mut self, vertices: [i64; 3], label: i32) -> &mut Self {
        self.triangles.push((vertices, label));
        self
    }

    fn slot(kind: RecordKind) -> usize {
        match kind {
            RecordKind::Vertices => 0,
            RecordKind::Tetrahedra => 1,
            RecordKind::Triangles => 2,
        }
    }

    fn advance(&mut self, kind: RecordKind) -> Result<usize, MeshError> {
        let len = self.count(kind);
        let cursor = self.cursors[Self::slot(kind)].as_mut().ok_or_else(|| {
            MeshError::MeshIoParse(format!("{} read before goto", kind.keyword()))
        })?;
        if *cursor >= len {
            return Err(MeshError::MeshIoParse(format!(
                "no more {} records",
                kind.keyword()
            )));
        }
        let idx = *cursor;
        *cursor += 1;
        Ok(idx)
    }
}

impl MeshRecordSource for MemorySource {
    fn version(&self) -> i32 {
        self.version
    }

    fn dimension(&self) -> i32 {
        self.dimension
    }

    fn count(&self, kind: RecordKind) -> usize {
        match kind {
            RecordKind::Vertices => self.vertices.len(),
            RecordKind::Tetrahedra => self.tetrahedra.len(),
            RecordKind::Triangles => self.triangles.len(),
        }
    }

    fn goto(&mut self, kind: RecordKind) -> Result<(), MeshError> {
        self.cursors[Self::slot(kind)] = Some(0);
        Ok(())
    }

    fn next_vertex(&mut self) -> Result<VertexRecord, MeshError> {
        let idx = self.advance(RecordKind::Vertices)?;
        Ok(self.vertices[idx])
    }

    fn next_tetrahedron(&mut self) -> Result<TetrahedronRecord, MeshError> {
        let idx = self.advance(RecordKind::Tetrahedra)?;
        Ok(self.tetrahedra[idx])
    }

    fn next_triangle(&mut self) -> Result<TriangleRecord, MeshError> {
        let idx = self.advance(RecordKind::Triangles)?;
        Ok(self.triangles[idx])
    }
}
