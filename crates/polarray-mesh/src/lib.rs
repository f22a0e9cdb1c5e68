#![warn(missing_docs)]

//! Triangle-mesh geometry backend for the polarray engine.
//!
//! Provides [`TriangleMesh`] — a flat-buffer triangle mesh with rigid
//! transform, merge, and manifold queries — plus mesh primitives for base
//! shapes, a binary STL writer, and [`MeshBoundary`], the
//! [`polarray_core::GeometryBoundary`] implementation over meshes.

use polarray_math::{Point3, Transform};
use std::collections::HashMap;
use thiserror::Error;

mod boundary;
mod primitives;
mod stl;

pub use boundary::MeshBoundary;
pub use primitives::{make_cube, make_cylinder, make_panel};
pub use stl::write_stl;

/// Errors returned by mesh operations.
#[derive(Error, Debug)]
pub enum MeshError {
    /// An I/O error occurred during export.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The geometry is empty (no vertices or triangles).
    #[error("empty geometry")]
    EmptyGeometry,
}

/// A triangle mesh with flat vertex and index buffers.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleMesh {
    /// Flat array of vertex positions: `[x0, y0, z0, x1, y1, z1, ...]` (f32).
    pub vertices: Vec<f32>,
    /// Flat array of triangle indices: `[i0, i1, i2, ...]` (u32).
    pub indices: Vec<u32>,
}

impl TriangleMesh {
    /// Create an empty mesh.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Number of triangles.
    pub fn num_triangles(&self) -> usize {
        self.indices.len() / 3
    }

    /// Number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Whether the mesh has no triangles.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Merge another mesh into this one.
    pub fn merge(&mut self, other: &TriangleMesh) {
        let offset = self.num_vertices() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.indices
            .extend(other.indices.iter().map(|&i| i + offset));
    }

    /// Return a transformed copy of this mesh.
    ///
    /// Transforms are rigid (rotation plus translation), so handedness is
    /// preserved and triangle winding never needs to flip.
    pub fn transformed(&self, transform: &Transform) -> TriangleMesh {
        let mut out = self.clone();
        for chunk in out.vertices.chunks_mut(3) {
            let p = Point3::new(chunk[0] as f64, chunk[1] as f64, chunk[2] as f64);
            let tp = transform.apply_point(&p);
            chunk[0] = tp.x as f32;
            chunk[1] = tp.y as f32;
            chunk[2] = tp.z as f32;
        }
        out
    }

    /// Whether the mesh is a closed 2-manifold.
    ///
    /// Requires every directed edge to appear exactly once and to be
    /// paired with its reverse — the standard watertightness test for
    /// shared-vertex meshes.
    pub fn is_closed(&self) -> bool {
        if self.indices.is_empty() {
            return false;
        }
        let mut edges: HashMap<(u32, u32), u32> = HashMap::new();
        for tri in self.indices.chunks(3) {
            if tri.len() < 3 || tri[0] == tri[1] || tri[1] == tri[2] || tri[2] == tri[0] {
                return false;
            }
            for k in 0..3 {
                let a = tri[k];
                let b = tri[(k + 1) % 3];
                *edges.entry((a, b)).or_insert(0) += 1;
            }
        }
        edges
            .iter()
            .all(|(&(a, b), &n)| n == 1 && edges.get(&(b, a)) == Some(&1))
    }

    /// Enclosed volume, computed from the signed tetrahedron sum.
    pub fn volume(&self) -> f64 {
        let verts = &self.vertices;
        let mut vol = 0.0;
        for tri in self.indices.chunks(3) {
            let (i0, i1, i2) = (
                tri[0] as usize * 3,
                tri[1] as usize * 3,
                tri[2] as usize * 3,
            );
            let v0 = [verts[i0] as f64, verts[i0 + 1] as f64, verts[i0 + 2] as f64];
            let v1 = [verts[i1] as f64, verts[i1 + 1] as f64, verts[i1 + 2] as f64];
            let v2 = [verts[i2] as f64, verts[i2 + 1] as f64, verts[i2 + 2] as f64];
            vol += v0[0] * (v1[1] * v2[2] - v2[1] * v1[2])
                - v1[0] * (v0[1] * v2[2] - v2[1] * v0[2])
                + v2[0] * (v0[1] * v1[2] - v1[1] * v0[2]);
        }
        (vol / 6.0).abs()
    }

    /// Axis-aligned bounding box as `(min, max)`, or `None` for a mesh
    /// with no vertices.
    pub fn bounding_box(&self) -> Option<([f64; 3], [f64; 3])> {
        if self.vertices.is_empty() {
            return None;
        }
        let mut min = [f64::MAX; 3];
        let mut max = [f64::MIN; 3];
        for chunk in self.vertices.chunks(3) {
            for i in 0..3 {
                let v = chunk[i] as f64;
                if v < min[i] {
                    min[i] = v;
                }
                if v > max[i] {
                    max[i] = v;
                }
            }
        }
        Some((min, max))
    }
}

impl Default for TriangleMesh {
    fn default() -> Self {
        Self::new()
    }
}
