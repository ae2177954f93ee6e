#![allow(dead_code)]
use tet_adjacency::io::MemorySource;

/// Corners of the unit tetrahedron plus one point below the base.
pub const POINTS: [[f64; 3]; 5] = [
    [0.0, 0.0, 0.0],
    [1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
    [0.0, 0.0, -1.0],
];

/// Boundary triangles (1-based) of tetrahedron `1 2 3 4`, oriented against its faces.
pub const UNIT_TET_BOUNDARY: [[i64; 3]; 4] = [[3, 2, 1], [4, 1, 2], [1, 4, 3], [2, 3, 4]];

/// Outer boundary triangles (1-based) of tetrahedra `1 2 3 4` and `1 3 2 5`.
pub const TWO_TET_BOUNDARY: [[i64; 3]; 6] = [
    [4, 1, 2],
    [1, 4, 3],
    [2, 3, 4],
    [5, 1, 3],
    [1, 5, 2],
    [3, 2, 5],
];

pub fn source_with_points(n: usize) -> MemorySource {
    let mut src = MemorySource::default();
    for p in &POINTS[..n] {
        src.push_vertex(*p, 0);
    }
    src
}

/// Single tetrahedron with its four boundary triangles labelled `labels`.
pub fn unit_tet(labels: [i32; 4]) -> MemorySource {
    let mut src = source_with_points(4);
    src.push_tetrahedron([1, 2, 3, 4], 1);
    for (tri, label) in UNIT_TET_BOUNDARY.iter().zip(labels) {
        src.push_triangle(*tri, label);
    }
    src
}

/// Two tetrahedra sharing the face `1 2 3`, with the six outer triangles labelled 20..26.
pub fn two_tets() -> MemorySource {
    let mut src = source_with_points(5);
    src.push_tetrahedron([1, 2, 3, 4], 1);
    src.push_tetrahedron([1, 3, 2, 5], 2);
    for (tri, label) in TWO_TET_BOUNDARY.iter().zip(20..) {
        src.push_triangle(*tri, label);
    }
    src
}

/// Vertex set of a face, for orientation-agnostic lookups.
pub fn sorted(mut v: [usize; 3]) -> [usize; 3] {
    v.sort_unstable();
    v
}
