//! [`GeometryBoundary`] implementation over triangle meshes.

use crate::TriangleMesh;
use polarray_core::{GeometryBoundary, UnionError};
use polarray_math::Transform;

/// Mesh-backed geometry kernel.
///
/// `union` is an aggregating merge: the operands' buffers are combined and
/// overlapping shells are kept as-is. Proper boolean CSG is the job of a
/// full geometry kernel behind the same trait; the realizer's control flow
/// (pairing order, failure reporting) is identical either way.
#[derive(Debug, Default, Clone, Copy)]
pub struct MeshBoundary;

impl GeometryBoundary for MeshBoundary {
    type Shape = TriangleMesh;

    fn copy(&self, shape: &TriangleMesh) -> TriangleMesh {
        shape.clone()
    }

    fn transformed(&self, shape: &TriangleMesh, transform: &Transform) -> TriangleMesh {
        shape.transformed(transform)
    }

    fn union(&self, a: &TriangleMesh, b: &TriangleMesh) -> Result<TriangleMesh, UnionError> {
        if a.is_empty() || b.is_empty() {
            return Err(UnionError("union operand has no geometry".to_string()));
        }
        let mut out = a.clone();
        out.merge(b);
        Ok(out)
    }

    fn is_solid(&self, shape: &TriangleMesh) -> bool {
        !shape.is_empty() && shape.is_closed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{make_cube, make_panel};

    #[test]
    fn test_is_solid() {
        let boundary = MeshBoundary;
        assert!(boundary.is_solid(&make_cube(10.0, 10.0, 10.0)));
        assert!(!boundary.is_solid(&make_panel(10.0, 5.0)));
        assert!(!boundary.is_solid(&TriangleMesh::new()));
    }

    #[test]
    fn test_union_merges() {
        let boundary = MeshBoundary;
        let a = make_cube(10.0, 10.0, 10.0);
        let b = make_cube(5.0, 5.0, 5.0);
        let merged = boundary.union(&a, &b).unwrap();
        assert_eq!(
            merged.num_triangles(),
            a.num_triangles() + b.num_triangles()
        );
    }

    #[test]
    fn test_union_rejects_empty_operand() {
        let boundary = MeshBoundary;
        let a = make_cube(10.0, 10.0, 10.0);
        assert!(boundary.union(&a, &TriangleMesh::new()).is_err());
        assert!(boundary.union(&TriangleMesh::new(), &a).is_err());
    }

    #[test]
    fn test_copy_is_deep() {
        let boundary = MeshBoundary;
        let a = make_cube(10.0, 10.0, 10.0);
        let mut copy = boundary.copy(&a);
        copy.vertices[0] = 99.0;
        assert_ne!(a.vertices[0], copy.vertices[0]);
    }
}
