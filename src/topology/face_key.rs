//! `FaceKey`: canonical identity of an oriented triangle.
//!
//! A triangle `(a, b, c)` is rotated so that its smallest vertex index comes
//! first while the cyclic order is preserved. Cyclic rotations of the same
//! triple therefore compare and hash equal, while the reverse orientation
//! `(c, b, a)` yields a different key, its [`flip`](FaceKey::flip).

use std::fmt;

use crate::mesh_error::MeshError;

/// Oriented triangle in canonical (minimum-first) rotation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaceKey([usize; 3]);

impl FaceKey {
    /// Canonicalizes the oriented triangle `(a, b, c)`.
    ///
    /// Vertices are expected to be pairwise distinct; use [`FaceKey::try_new`]
    /// when the input has not been checked.
    #[inline]
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        let v = [a, b, c];
        let imin = if a < b {
            if a < c { 0 } else { 2 }
        } else if b < c {
            1
        } else {
            2
        };
        FaceKey([v[imin], v[(imin + 1) % 3], v[(imin + 2) % 3]])
    }

    /// Like [`FaceKey::new`] but rejects triangles with a repeated vertex.
    pub fn try_new(a: usize, b: usize, c: usize) -> Result<Self, MeshError> {
        if a == b || b == c || a == c {
            return Err(MeshError::DegenerateTriangle {
                vertices: [a, b, c],
            });
        }
        Ok(Self::new(a, b, c))
    }

    /// True for exactly one member of `{self, self.flip()}`.
    #[inline]
    pub fn ordered(&self) -> bool {
        self.0[1] < self.0[2]
    }

    /// Key of the reverse-oriented triangle.
    #[inline]
    pub fn flip(&self) -> Self {
        // The minimum stays in front, so swapping the tail is already canonical.
        FaceKey([self.0[0], self.0[2], self.0[1]])
    }

    /// The three vertex indices in canonical order.
    #[inline]
    pub const fn vertices(&self) -> [usize; 3] {
        self.0
    }
}

impl fmt::Display for FaceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0[0], self.0[1], self.0[2])
    }
}
