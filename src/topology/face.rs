//! Consolidated triangular faces with two-sided element adjacency.

use serde::{Deserialize, Serialize};

/// How a face sits in the mesh.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FaceKind {
    /// A tetrahedron on exactly one side.
    Boundary,
    /// Tetrahedra on both sides, no boundary label.
    Interior,
    /// Tetrahedra on both sides and a boundary label (crack or material interface).
    Slit,
}

/// One distinct geometric triangle of the mesh.
///
/// `vertices` are in canonical orientation (see
/// [`FaceKey`](crate::topology::face_key::FaceKey)); `left` owns that
/// orientation and `right` owns the reverse one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Face {
    pub vertices: [usize; 3],
    pub label: Option<i32>,
    pub left: Option<usize>,
    pub right: Option<usize>,
    /// Reserved; normals are not computed here.
    pub normal: Option<[f64; 3]>,
}

impl Face {
    pub fn kind(&self) -> FaceKind {
        match (self.left, self.right, self.label) {
            (Some(_), Some(_), Some(_)) => FaceKind::Slit,
            (Some(_), Some(_), None) => FaceKind::Interior,
            _ => FaceKind::Boundary,
        }
    }

    /// Elements on either side, `left` first.
    pub fn elements(&self) -> impl Iterator<Item = usize> + '_ {
        self.left.into_iter().chain(self.right)
    }

    /// True if `element` lies on either side of this face.
    pub fn touches(&self, element: usize) -> bool {
        self.left == Some(element) || self.right == Some(element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn face(left: Option<usize>, right: Option<usize>, label: Option<i32>) -> Face {
        Face {
            vertices: [0, 1, 2],
            label,
            left,
            right,
            normal: None,
        }
    }

    #[test]
    fn kind_by_sides_and_label() {
        assert_eq!(face(Some(0), None, Some(3)).kind(), FaceKind::Boundary);
        assert_eq!(face(None, Some(0), Some(3)).kind(), FaceKind::Boundary);
        assert_eq!(face(Some(0), Some(1), None).kind(), FaceKind::Interior);
        assert_eq!(face(Some(0), Some(1), Some(7)).kind(), FaceKind::Slit);
    }

    #[test]
    fn elements_and_touches() {
        let f = face(None, Some(4), Some(1));
        assert_eq!(f.elements().collect::<Vec<_>>(), vec![4]);
        assert!(f.touches(4));
        assert!(!f.touches(0));
    }
}
