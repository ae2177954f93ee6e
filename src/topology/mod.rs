//! Face topology of tetrahedral meshes.
//!
//! - [`face_key`]: canonical oriented triangle keys
//! - [`adjacency`]: the key -> element/label table and its consolidation
//! - [`face`]: consolidated two-sided faces
//! - [`cell_type`]: cell kinds and their VTK codes

pub mod adjacency;
pub mod cell_type;
pub mod face;
pub mod face_key;
