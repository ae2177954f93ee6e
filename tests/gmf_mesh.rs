mod util;

use tet_adjacency::prelude::*;

const TWO_TETS: &str = r#"MeshVersionFormatted 2

Dimension 3

Vertices
5
0 0 0 0
1 0 0 0
0 1 0 0
0 0 1 0
0 0 -1 0

Triangles
6
4 1 2 20
1 4 3 21
2 3 4 22
5 1 3 23
1 5 2 24
3 2 5 25

Tetrahedra
2
1 2 3 4 1
1 3 2 5 2

End
"#;

#[test]
fn gmf_text_builds_same_mesh_as_records() {
    let from_text = TetMesh::read(TWO_TETS.as_bytes(), BuildOptions::default()).unwrap();
    let from_records =
        TetMesh::from_source(&mut util::two_tets(), BuildOptions::default()).unwrap();
    assert_eq!(from_text, from_records);
}

#[test]
fn gmf_open_reads_from_disk() {
    let path = std::env::temp_dir().join(format!("tet_adjacency_{}.mesh", std::process::id()));
    std::fs::write(&path, TWO_TETS).unwrap();
    let mesh = TetMesh::open(&path, BuildOptions::default());
    std::fs::remove_file(&path).unwrap();
    assert_eq!(mesh.unwrap().faces().len(), 7);
}

#[test]
fn gmf_open_missing_file_is_io_error() {
    let err = TetMesh::open("/nonexistent/dir/mesh.mesh", BuildOptions::default()).unwrap_err();
    assert!(matches!(err, MeshError::Io(_)), "unexpected error: {err:?}");
}

#[test]
fn gmf_unsupported_version_rejected_before_ingestion() {
    let text = TWO_TETS.replacen("MeshVersionFormatted 2", "MeshVersionFormatted 3", 1);
    assert_eq!(
        TetMesh::read(text.as_bytes(), BuildOptions::default()).unwrap_err(),
        MeshError::IncompatibleMesh {
            version: 3,
            dimension: 3
        }
    );
}

#[test]
fn gmf_two_dimensional_mesh_rejected() {
    let text = "MeshVersionFormatted 2\nDimension 2\nVertices\n1\n0 0 0\nEnd\n";
    assert_eq!(
        TetMesh::read(text.as_bytes(), BuildOptions::default()).unwrap_err(),
        MeshError::IncompatibleMesh {
            version: 2,
            dimension: 2
        }
    );
}

#[test]
fn gmf_bad_number_is_parse_error() {
    let text = TWO_TETS.replacen("1 3 2 5 2", "1 3 x 5 2", 1);
    let err = TetMesh::read(text.as_bytes(), BuildOptions::default()).unwrap_err();
    assert!(matches!(err, MeshError::MeshIoParse(_)), "unexpected error: {err:?}");
}

#[test]
fn gmf_oversized_section_count_is_parse_error() {
    let text = TWO_TETS.replacen("Tetrahedra\n2\n", "Tetrahedra\n3689348814741910324\n", 1);
    assert_ne!(text, TWO_TETS);
    let err = TetMesh::read(text.as_bytes(), BuildOptions::default()).unwrap_err();
    assert!(matches!(err, MeshError::MeshIoParse(_)), "unexpected error: {err:?}");
}
