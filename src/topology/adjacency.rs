//! Face adjacency table: oriented face key -> owning element and label.
//!
//! Every tetrahedron registers its four outward faces here. Boundary triangles
//! then either add the missing orientation of a face (outer boundary) or label
//! an already two-sided face (slit). [`AdjacencyTable::consolidate`] finally
//! pairs each key with its flip and emits one [`Face`] per geometric triangle.

use hashbrown::HashMap;
use itertools::Itertools;

use crate::mesh_error::MeshError;
use crate::topology::face::Face;
use crate::topology::face_key::FaceKey;

/// What is known about one orientation of a face.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FaceProperty {
    /// Element owning this orientation, `None` on the outside of the mesh.
    pub element: Option<usize>,
    /// Boundary label, `None` until a boundary triangle supplies one.
    pub label: Option<i32>,
}

impl FaceProperty {
    /// Orientation owned by `element`, not yet labelled.
    pub fn owned_by(element: usize) -> Self {
        Self {
            element: Some(element),
            label: None,
        }
    }

    /// Orientation with no element behind it, carrying `label`.
    pub fn outside(label: i32) -> Self {
        Self {
            element: None,
            label: Some(label),
        }
    }
}

/// Map from [`FaceKey`] to [`FaceProperty`], owned by a single mesh build.
#[derive(Clone, Debug, Default)]
pub struct AdjacencyTable {
    faces: HashMap<FaceKey, FaceProperty>,
}

impl AdjacencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Preallocates room for the faces of `tetrahedra` elements.
    pub fn with_tetrahedra(tetrahedra: usize) -> Self {
        Self {
            faces: HashMap::with_capacity(tetrahedra.saturating_mul(4)),
        }
    }

    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    pub fn contains(&self, key: &FaceKey) -> bool {
        self.faces.contains_key(key)
    }

    /// Inserts `property` under `key`, failing if the key is already taken.
    pub fn insert_unique(&mut self, key: FaceKey, property: FaceProperty) -> Result<(), MeshError> {
        match self.faces.entry(key) {
            hashbrown::hash_map::Entry::Occupied(_) => Err(MeshError::DuplicateFace {
                face: key.vertices(),
            }),
            hashbrown::hash_map::Entry::Vacant(slot) => {
                slot.insert(property);
                Ok(())
            }
        }
    }

    pub fn get(&self, key: &FaceKey) -> Option<&FaceProperty> {
        self.faces.get(key)
    }

    pub fn get_mut(&mut self, key: &FaceKey) -> Option<&mut FaceProperty> {
        self.faces.get_mut(key)
    }

    /// Property of a key that must be present.
    pub fn try_get(&self, key: &FaceKey) -> Result<&FaceProperty, MeshError> {
        self.faces.get(key).ok_or(MeshError::MissingFlip {
            face: key.vertices(),
        })
    }

    /// Mutable property of a key that must be present.
    pub fn try_get_mut(&mut self, key: &FaceKey) -> Result<&mut FaceProperty, MeshError> {
        self.faces.get_mut(key).ok_or(MeshError::MissingFlip {
            face: key.vertices(),
        })
    }

    /// Sets the label of an existing key, leaving its element untouched.
    pub fn set_label(&mut self, key: &FaceKey, label: i32) -> Result<(), MeshError> {
        self.try_get_mut(key)?.label = Some(label);
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FaceKey, &FaceProperty)> {
        self.faces.iter()
    }

    /// Pairs every face with its flip and emits one [`Face`] per geometric triangle.
    ///
    /// The ordered member of each `{key, flip}` pair is the representative:
    /// its element becomes `left`, the flip's element becomes `right`. Faces
    /// are returned sorted by canonical key.
    ///
    /// # Errors
    /// - [`MeshError::MissingFlip`] if a representative key lacks its reverse orientation.
    /// - [`MeshError::MissingBoundaryTriangle`] if a non-representative key lacks
    ///   its reverse orientation; no boundary triangle closed that face.
    /// - [`MeshError::LabelMismatch`] if the two orientations carry different labels.
    /// - [`MeshError::DegenerateFace`] if one element lies on both sides.
    pub fn consolidate(&self) -> Result<Vec<Face>, MeshError> {
        let mut faces = Vec::with_capacity(self.faces.len() / 2);
        for (key, prop) in self.iter().sorted_unstable_by_key(|(key, _)| **key) {
            if !key.ordered() {
                // Its ordered partner emits the face; only check that it exists.
                if !self.contains(&key.flip()) {
                    return Err(MeshError::MissingBoundaryTriangle {
                        face: key.vertices(),
                        element: prop.element,
                    });
                }
                continue;
            }
            faces.push(self.consolidate_pair(key, prop)?);
        }
        Ok(faces)
    }

    fn consolidate_pair(&self, key: &FaceKey, prop: &FaceProperty) -> Result<Face, MeshError> {
        let flipped = self.try_get(&key.flip())?;
        if prop.label != flipped.label {
            return Err(MeshError::LabelMismatch {
                face: key.vertices(),
                label: prop.label,
                flipped_label: flipped.label,
            });
        }
        if let (Some(left), Some(right)) = (prop.element, flipped.element) {
            if left == right {
                return Err(MeshError::DegenerateFace {
                    face: key.vertices(),
                    element: left,
                });
            }
        }
        Ok(Face {
            vertices: key.vertices(),
            label: prop.label,
            left: prop.element,
            right: flipped.element,
            normal: None,
        })
    }
}
