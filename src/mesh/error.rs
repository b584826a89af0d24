/// Structural and geometric defects found by [validating](crate::Mesh::validate) a mesh.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MeshError {
    #[error("triangle {triangle} references vertex {index}, but only {len} vertices exist")]
    IndexOutOfRange {
        triangle: usize,
        index: usize,
        len: usize,
    },
    #[error("triangle {triangle} repeats a vertex: {indices:?}")]
    RepeatedIndex { triangle: usize, indices: [usize; 3] },
    #[error("triangle {triangle} has zero or near-zero area")]
    DegenerateGeometry { triangle: usize },
}
