#![warn(missing_docs)]

//! polarray — circular (polar) array generation for parametric CAD.
//!
//! Arranges copies of a base shape in concentric rings around an axis and
//! realizes them as a plain compound, a fused solid, or a lightweight
//! linked array sharing one base shape.
//!
//! # Example
//!
//! ```
//! use polarray::{ArrayParameters, CircularArray, Point3, Vec3};
//!
//! let params = ArrayParameters::new(
//!     200.0, // radial distance between rings
//!     100.0, // tangential spacing within a ring
//!     3,     // rings, including the original
//!     1,     // symmetry sectors
//!     Point3::origin(),
//!     Vec3::z(),
//!     false, // fuse
//!     false, // link_array
//! )
//! .unwrap();
//!
//! let array = CircularArray::new(params);
//! assert_eq!(array.plan().summary(), "39 instances in 3 rings");
//! ```

pub use polarray_core;
pub use polarray_math;
pub use polarray_mesh;

pub use polarray_core::{
    ArrayError, ArrayOutcome, ArrayParameters, ArrayResult, GeometryBoundary, LinkedArray,
    ModeNotice, OutputMode, Placement, Result, Ring, UnionError,
};
pub use polarray_math::{Dir3, Point3, Tolerance, Transform, Vec3};
pub use polarray_mesh::{
    make_cube, make_cylinder, make_panel, write_stl, MeshBoundary, MeshError, TriangleMesh,
};

/// A configured circular array feature.
///
/// Wraps one validated parameter snapshot; planning and realization are
/// idempotent and side-effect-free, so the same `CircularArray` can be
/// recomputed any number of times.
#[derive(Debug, Clone)]
pub struct CircularArray {
    params: ArrayParameters,
}

/// Placement diagnostics for an array, computed without realizing any
/// geometry.
#[derive(Debug, Clone)]
pub struct ArrayPlan {
    /// Ring table: radius and element count per ring.
    pub rings: Vec<Ring>,
    /// Full placement list, ring-major and angle-ascending.
    pub placements: Vec<Placement>,
}

impl ArrayPlan {
    /// Total number of placed instances.
    pub fn total_instances(&self) -> usize {
        self.placements.len()
    }

    /// Number of rings, including the original.
    pub fn ring_count(&self) -> usize {
        self.rings.len()
    }

    /// Human-readable one-liner, e.g. `"39 instances in 3 rings"`.
    pub fn summary(&self) -> String {
        format!(
            "{} instances in {} rings",
            self.total_instances(),
            self.ring_count()
        )
    }
}

impl CircularArray {
    /// Create an array feature from validated parameters.
    pub fn new(params: ArrayParameters) -> Self {
        Self { params }
    }

    /// The parameter snapshot this feature was configured with.
    pub fn params(&self) -> &ArrayParameters {
        &self.params
    }

    /// Compute the ring table and placement list without touching geometry.
    pub fn plan(&self) -> ArrayPlan {
        let rings = polarray_core::distribute(&self.params);
        let placements = polarray_core::generate(&self.params, &rings);
        ArrayPlan { rings, placements }
    }

    /// Realize the array against an arbitrary geometry kernel.
    pub fn realize<B: GeometryBoundary>(
        &self,
        boundary: &B,
        base: &B::Shape,
    ) -> Result<ArrayOutcome<B::Shape>> {
        polarray_core::realize(boundary, base, &self.params)
    }

    /// Realize the array against the bundled triangle-mesh backend.
    pub fn realize_mesh(&self, base: &TriangleMesh) -> Result<ArrayOutcome<TriangleMesh>> {
        self.realize(&MeshBoundary, base)
    }
}
