//! Legacy VTK (`.vtk`) writer for unstructured grids.
//!
//! Writes an ASCII `UNSTRUCTURED_GRID` with tetrahedra followed by the
//! selected faces, and a per-cell integer scalar `mat` holding the
//! tetrahedron and face labels in the same order. Unlabelled faces are
//! written with label `-1`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::mesh::TetMesh;
use crate::mesh_error::MeshError;
use crate::topology::cell_type::CellType;
use crate::topology::face::Face;

/// Label written for faces without one.
pub const UNLABELLED: i32 = -1;

/// Which faces go into the cells block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FaceSelection {
    /// Every consolidated face.
    All,
    /// Only faces carrying a boundary label (outer and slit boundaries).
    #[default]
    Labelled,
    /// Tetrahedra only.
    None,
}

/// Options for [`VtkWriter`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VtkWriteOptions {
    pub faces: FaceSelection,
    /// Second header line of the file.
    pub title: String,
}

impl Default for VtkWriteOptions {
    fn default() -> Self {
        Self {
            faces: FaceSelection::default(),
            title: "tet-adjacency".to_string(),
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct VtkWriter {
    options: VtkWriteOptions,
}

impl VtkWriter {
    pub fn new(options: VtkWriteOptions) -> Self {
        Self { options }
    }

    fn selected<'a>(&self, mesh: &'a TetMesh) -> Vec<&'a Face> {
        match self.options.faces {
            FaceSelection::All => mesh.faces().iter().collect(),
            FaceSelection::Labelled => mesh.faces().iter().filter(|f| f.label.is_some()).collect(),
            FaceSelection::None => Vec::new(),
        }
    }

    /// Writes `mesh` to the file at `path`.
    pub fn write_file<P: AsRef<Path>>(&self, path: P, mesh: &TetMesh) -> Result<(), MeshError> {
        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);
        self.write(&mut writer, mesh)?;
        writer.flush()?;
        Ok(())
    }

    /// Writes `mesh` as legacy ASCII VTK.
    pub fn write<W: Write>(&self, mut writer: W, mesh: &TetMesh) -> Result<(), MeshError> {
        let faces = self.selected(mesh);
        let tets = mesh.tetrahedra();
        let cell_count = tets.len() + faces.len();
        let total_size = tets.len() * (CellType::Tetrahedron.vertex_count() + 1)
            + faces.len() * (CellType::Triangle.vertex_count() + 1);

        writeln!(writer, "# vtk DataFile Version 3.0")?;
        writeln!(writer, "{}", self.options.title)?;
        writeln!(writer, "ASCII")?;
        writeln!(writer, "DATASET UNSTRUCTURED_GRID")?;
        writeln!(writer, "POINTS {} float", mesh.points().len())?;
        for p in mesh.points() {
            writeln!(writer, "{} {} {}", p.x, p.y, p.z)?;
        }

        writeln!(writer, "CELLS {cell_count} {total_size}")?;
        for tet in tets {
            let [a, b, c, d] = tet.vertices;
            writeln!(writer, "4 {a} {b} {c} {d}")?;
        }
        for face in &faces {
            let [a, b, c] = face.vertices;
            writeln!(writer, "3 {a} {b} {c}")?;
        }

        writeln!(writer, "CELL_TYPES {cell_count}")?;
        for _ in tets {
            writeln!(writer, "{}", CellType::Tetrahedron.vtk_code())?;
        }
        for _ in &faces {
            writeln!(writer, "{}", CellType::Triangle.vtk_code())?;
        }

        writeln!(writer, "CELL_DATA {cell_count}")?;
        writeln!(writer, "SCALARS mat int")?;
        writeln!(writer, "LOOKUP_TABLE default")?;
        for tet in tets {
            writeln!(writer, "{}", tet.label)?;
        }
        for face in &faces {
            writeln!(writer, "{}", face.label.unwrap_or(UNLABELLED))?;
        }
        log::debug!(
            "wrote VTK grid: {} points, {} tetrahedra, {} faces",
            mesh.points().len(),
            tets.len(),
            faces.len()
        );
        Ok(())
    }
}
