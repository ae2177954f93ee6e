//! Cell type metadata for mesh cells.

use serde::{Deserialize, Serialize};

/// Cell types present in a tetrahedral volume mesh.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum CellType {
    /// 2D simplex (face or boundary triangle).
    Triangle,
    /// 3D simplex (tet).
    Tetrahedron,
}

impl CellType {
    /// Number of vertices in the cell.
    pub fn vertex_count(self) -> usize {
        match self {
            CellType::Triangle => 3,
            CellType::Tetrahedron => 4,
        }
    }

    /// Legacy VTK cell type code.
    pub fn vtk_code(self) -> i32 {
        match self {
            CellType::Triangle => 5,
            CellType::Tetrahedron => 10,
        }
    }
}
