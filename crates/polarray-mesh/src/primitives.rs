//! Mesh primitives used as array base shapes.

use crate::TriangleMesh;
use std::f64::consts::PI;

/// Build a box (cuboid) with corner at origin and dimensions `(sx, sy, sz)`.
///
/// 8 shared vertices, 12 triangles, outward CCW winding.
pub fn make_cube(sx: f64, sy: f64, sz: f64) -> TriangleMesh {
    let (sx, sy, sz) = (sx as f32, sy as f32, sz as f32);
    #[rustfmt::skip]
    let vertices = vec![
        0.0, 0.0, 0.0, // v0
        sx,  0.0, 0.0, // v1
        sx,  sy,  0.0, // v2
        0.0, sy,  0.0, // v3
        0.0, 0.0, sz,  // v4
        sx,  0.0, sz,  // v5
        sx,  sy,  sz,  // v6
        0.0, sy,  sz,  // v7
    ];
    #[rustfmt::skip]
    let indices = vec![
        0, 3, 2, 0, 2, 1, // bottom (-Z)
        4, 5, 6, 4, 6, 7, // top (+Z)
        0, 1, 5, 0, 5, 4, // front (-Y)
        2, 3, 7, 2, 7, 6, // back (+Y)
        0, 4, 7, 0, 7, 3, // left (-X)
        1, 2, 6, 1, 6, 5, // right (+X)
    ];
    TriangleMesh { vertices, indices }
}

/// Build a cylinder along +Z with base at the origin plane.
///
/// `segments` rim subdivisions (minimum 3). Side quads split into two
/// triangles each; caps are fans around center vertices.
pub fn make_cylinder(radius: f64, height: f64, segments: u32) -> TriangleMesh {
    let n = segments.max(3) as usize;
    let mut vertices = Vec::with_capacity((2 * n + 2) * 3);
    // bottom rim [0, n), top rim [n, 2n)
    for ring_z in [0.0f64, height] {
        for i in 0..n {
            let theta = 2.0 * PI * i as f64 / n as f64;
            vertices.push((radius * theta.cos()) as f32);
            vertices.push((radius * theta.sin()) as f32);
            vertices.push(ring_z as f32);
        }
    }
    let bottom_center = (2 * n) as u32;
    let top_center = (2 * n + 1) as u32;
    vertices.extend_from_slice(&[0.0, 0.0, 0.0]);
    vertices.extend_from_slice(&[0.0, 0.0, height as f32]);

    let mut indices = Vec::with_capacity(4 * n * 3);
    for i in 0..n {
        let next = (i + 1) % n;
        let (b0, b1) = (i as u32, next as u32);
        let (t0, t1) = ((n + i) as u32, (n + next) as u32);
        // side quad, outward winding
        indices.extend_from_slice(&[b0, b1, t1]);
        indices.extend_from_slice(&[b0, t1, t0]);
        // caps
        indices.extend_from_slice(&[bottom_center, b1, b0]);
        indices.extend_from_slice(&[top_center, t0, t1]);
    }
    TriangleMesh { vertices, indices }
}

/// Build an open rectangular panel in the XY plane (two triangles).
///
/// Not a closed solid; useful for exercising the non-fusable path.
pub fn make_panel(width: f64, height: f64) -> TriangleMesh {
    let (w, h) = (width as f32, height as f32);
    TriangleMesh {
        vertices: vec![0.0, 0.0, 0.0, w, 0.0, 0.0, w, h, 0.0, 0.0, h, 0.0],
        indices: vec![0, 1, 2, 0, 2, 3],
    }
}
