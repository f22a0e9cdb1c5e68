//! Realizer: materialize placements as a compound, fused solid, or linked
//! array.

use crate::boundary::GeometryBoundary;
use crate::error::{ArrayError, Result};
use crate::params::{ArrayParameters, ModeNotice, OutputMode};
use crate::placement::{generate, Placement};
use crate::rings::{distribute, Ring};
use polarray_math::Transform;

/// Geometry-sharing array representation.
///
/// Holds one base shape plus per-instance transforms, so storage grows by
/// one transform per instance regardless of shape size. Touching or
/// overlapping instances remain separate bodies.
#[derive(Debug, Clone)]
pub struct LinkedArray<S> {
    base: S,
    transforms: Vec<Transform>,
}

impl<S> LinkedArray<S> {
    /// The shared base shape.
    pub fn base(&self) -> &S {
        &self.base
    }

    /// Per-instance transforms in placement order.
    pub fn transforms(&self) -> &[Transform] {
        &self.transforms
    }

    /// Number of instances.
    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    /// Whether the array holds no instances.
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Iterate `(base, transform)` pairs in placement order.
    pub fn instances(&self) -> impl Iterator<Item = (&S, &Transform)> {
        self.transforms.iter().map(move |t| (&self.base, t))
    }
}

/// The realized array, one of the three output representations.
#[derive(Debug, Clone)]
pub enum ArrayResult<S> {
    /// Independent transformed copies grouped together, no boolean applied.
    Compound(Vec<S>),
    /// A single solid, the boolean union of all placed copies.
    Fused(S),
    /// One shared base shape plus lightweight transform-only instances.
    Linked(LinkedArray<S>),
}

/// Everything a recompute returns: the realized result plus the ring table
/// and full ordered placement list for diagnostics ("N instances in M
/// rings" without recomputation), and any warning-level notice.
#[derive(Debug, Clone)]
pub struct ArrayOutcome<S> {
    /// The realized array.
    pub result: ArrayResult<S>,
    /// Ring table the placements were generated from.
    pub rings: Vec<Ring>,
    /// Full placement list, ring-major and angle-ascending.
    pub placements: Vec<Placement>,
    /// Warning raised while resolving parameters, if any.
    pub notice: Option<ModeNotice>,
}

/// Run the full pipeline: distribute rings, generate placements, and
/// materialize the configured output representation.
///
/// Single-pass and synchronous; on the first error the invocation aborts
/// with a typed failure and no partial result. Fusion unions accumulate in
/// placement order starting from the original (identity) copy.
pub fn realize<B: GeometryBoundary>(
    boundary: &B,
    base: &B::Shape,
    params: &ArrayParameters,
) -> Result<ArrayOutcome<B::Shape>> {
    if params.mode() == OutputMode::Fused && !boundary.is_solid(base) {
        return Err(ArrayError::UnsupportedGeometry);
    }

    let rings = distribute(params);
    let placements = generate(params, &rings);

    let result = match params.mode() {
        OutputMode::Linked => ArrayResult::Linked(LinkedArray {
            base: boundary.copy(base),
            transforms: placements.iter().map(|p| p.transform.clone()).collect(),
        }),
        OutputMode::Compound => ArrayResult::Compound(
            placements
                .iter()
                .map(|p| boundary.transformed(base, &p.transform))
                .collect(),
        ),
        OutputMode::Fused => {
            // Placement 0 is the identity; start from a plain copy.
            let mut fused = boundary.copy(base);
            for placement in placements.iter().skip(1) {
                let instance = boundary.transformed(base, &placement.transform);
                fused = boundary.union(&fused, &instance).map_err(|e| {
                    ArrayError::FusionFailed {
                        ring: placement.ring,
                        element: placement.element,
                        reason: e.0,
                    }
                })?;
            }
            ArrayResult::Fused(fused)
        }
    };

    Ok(ArrayOutcome {
        result,
        rings,
        placements,
        notice: params.notice(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::UnionError;
    use polarray_math::{Point3, Vec3};
    use std::cell::Cell;

    /// Minimal stand-in shape: a solidity flag and a piece count.
    #[derive(Debug, Clone, PartialEq)]
    struct Blob {
        solid: bool,
        pieces: usize,
    }

    /// Stub kernel; optionally rejects the n-th union call.
    struct StubKernel {
        fail_on_union: Option<usize>,
        unions: Cell<usize>,
    }

    impl StubKernel {
        fn new() -> Self {
            Self {
                fail_on_union: None,
                unions: Cell::new(0),
            }
        }

        fn failing_on(n: usize) -> Self {
            Self {
                fail_on_union: Some(n),
                unions: Cell::new(0),
            }
        }
    }

    impl GeometryBoundary for StubKernel {
        type Shape = Blob;

        fn copy(&self, shape: &Blob) -> Blob {
            shape.clone()
        }

        fn transformed(&self, shape: &Blob, _transform: &Transform) -> Blob {
            shape.clone()
        }

        fn union(&self, a: &Blob, b: &Blob) -> std::result::Result<Blob, UnionError> {
            let n = self.unions.get() + 1;
            self.unions.set(n);
            if self.fail_on_union == Some(n) {
                return Err(UnionError("kernel rejected the pair".to_string()));
            }
            Ok(Blob {
                solid: true,
                pieces: a.pieces + b.pieces,
            })
        }

        fn is_solid(&self, shape: &Blob) -> bool {
            shape.solid
        }
    }

    fn solid_blob() -> Blob {
        Blob {
            solid: true,
            pieces: 1,
        }
    }

    fn params(fuse: bool, link_array: bool) -> ArrayParameters {
        // 39 instances in 3 rings (1 + 13 + 25)
        ArrayParameters::new(
            200.0,
            100.0,
            3,
            1,
            Point3::origin(),
            Vec3::z(),
            fuse,
            link_array,
        )
        .unwrap()
    }

    #[test]
    fn test_compound_has_one_shape_per_placement() {
        let kernel = StubKernel::new();
        let outcome = realize(&kernel, &solid_blob(), &params(false, false)).unwrap();
        assert_eq!(outcome.placements.len(), 39);
        match outcome.result {
            ArrayResult::Compound(shapes) => assert_eq!(shapes.len(), 39),
            other => panic!("expected compound, got {other:?}"),
        }
    }

    #[test]
    fn test_fused_accumulates_all_instances() {
        let kernel = StubKernel::new();
        let outcome = realize(&kernel, &solid_blob(), &params(true, false)).unwrap();
        match outcome.result {
            ArrayResult::Fused(blob) => assert_eq!(blob.pieces, 39),
            other => panic!("expected fused, got {other:?}"),
        }
        // one union per placement after the original
        assert_eq!(kernel.unions.get(), 38);
    }

    #[test]
    fn test_linked_shares_one_base() {
        let kernel = StubKernel::new();
        let outcome = realize(&kernel, &solid_blob(), &params(false, true)).unwrap();
        match &outcome.result {
            ArrayResult::Linked(linked) => {
                assert_eq!(linked.len(), 39);
                assert_eq!(linked.transforms().len(), outcome.placements.len());
                assert_eq!(linked.transforms()[0], Transform::identity());
                let mut count = 0;
                for (base, _t) in linked.instances() {
                    assert_eq!(base.pieces, 1);
                    count += 1;
                }
                assert_eq!(count, 39);
            }
            other => panic!("expected linked, got {other:?}"),
        }
    }

    #[test]
    fn test_fuse_on_non_solid_fails_before_any_union() {
        let kernel = StubKernel::new();
        let open = Blob {
            solid: false,
            pieces: 1,
        };
        let err = realize(&kernel, &open, &params(true, false)).unwrap_err();
        assert_eq!(err, ArrayError::UnsupportedGeometry);
        assert_eq!(kernel.unions.get(), 0);
    }

    #[test]
    fn test_fusion_failure_reports_ring_and_element() {
        // First union pairs the original with ring 1, element 0.
        let kernel = StubKernel::failing_on(1);
        let err = realize(&kernel, &solid_blob(), &params(true, false)).unwrap_err();
        match err {
            ArrayError::FusionFailed {
                ring,
                element,
                reason,
            } => {
                assert_eq!(ring, 1);
                assert_eq!(element, 0);
                assert!(!reason.is_empty());
            }
            other => panic!("expected fusion failure, got {other:?}"),
        }

        // Failing deep into ring 2: union n pairs placement n, so union 15
        // fails at ring 2 (ring 1 holds 13 elements), element 15-13-1=1.
        let kernel = StubKernel::failing_on(15);
        let err = realize(&kernel, &solid_blob(), &params(true, false)).unwrap_err();
        match err {
            ArrayError::FusionFailed { ring, element, .. } => {
                assert_eq!(ring, 2);
                assert_eq!(element, 1);
            }
            other => panic!("expected fusion failure, got {other:?}"),
        }
    }

    #[test]
    fn test_non_solid_base_fine_without_fuse() {
        let kernel = StubKernel::new();
        let open = Blob {
            solid: false,
            pieces: 1,
        };
        assert!(realize(&kernel, &open, &params(false, false)).is_ok());
        assert!(realize(&kernel, &open, &params(false, true)).is_ok());
    }

    #[test]
    fn test_conflicting_flags_yield_linked_with_notice() {
        // fuse and link_array both set: linked wins, fuse reported ignored
        let kernel = StubKernel::new();
        let outcome = realize(&kernel, &solid_blob(), &params(true, true)).unwrap();
        assert!(matches!(outcome.result, ArrayResult::Linked(_)));
        assert_eq!(outcome.notice, Some(ModeNotice::FuseIgnored));
        assert_eq!(kernel.unions.get(), 0);
    }

    #[test]
    fn test_outcome_carries_diagnostics() {
        let kernel = StubKernel::new();
        let outcome = realize(&kernel, &solid_blob(), &params(false, true)).unwrap();
        assert_eq!(outcome.rings.len(), 3);
        assert_eq!(outcome.placements.len(), 39);
        assert_eq!(outcome.placements[0].transform, Transform::identity());
    }
}
