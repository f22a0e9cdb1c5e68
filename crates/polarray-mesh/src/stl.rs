//! Binary STL export.

use crate::{MeshError, TriangleMesh};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write the mesh as binary STL.
///
/// Facet normals are recomputed from triangle winding; degenerate
/// triangles get a zero normal, which STL consumers tolerate.
pub fn write_stl(mesh: &TriangleMesh, path: impl AsRef<Path>) -> Result<(), MeshError> {
    if mesh.is_empty() {
        return Err(MeshError::EmptyGeometry);
    }

    let file = File::create(path)?;
    let mut w = BufWriter::new(file);

    // 80-byte header + u32 triangle count
    w.write_all(&[0u8; 80])?;
    w.write_all(&(mesh.num_triangles() as u32).to_le_bytes())?;

    let verts = &mesh.vertices;
    for tri in mesh.indices.chunks(3) {
        let v = |i: u32| {
            let base = i as usize * 3;
            [verts[base], verts[base + 1], verts[base + 2]]
        };
        let (a, b, c) = (v(tri[0]), v(tri[1]), v(tri[2]));
        let n = facet_normal(&a, &b, &c);
        for f in n.iter().chain(a.iter()).chain(b.iter()).chain(c.iter()) {
            w.write_all(&f.to_le_bytes())?;
        }
        w.write_all(&0u16.to_le_bytes())?;
    }
    w.flush()?;
    Ok(())
}

fn facet_normal(a: &[f32; 3], b: &[f32; 3], c: &[f32; 3]) -> [f32; 3] {
    let u = [b[0] - a[0], b[1] - a[1], b[2] - a[2]];
    let v = [c[0] - a[0], c[1] - a[1], c[2] - a[2]];
    let n = [
        u[1] * v[2] - u[2] * v[1],
        u[2] * v[0] - u[0] * v[2],
        u[0] * v[1] - u[1] * v[0],
    ];
    let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
    if len < 1e-20 {
        [0.0, 0.0, 0.0]
    } else {
        [n[0] / len, n[1] / len, n[2] / len]
    }
}
