//! Placement generator: ring/angle data into rigid transforms.

use crate::params::ArrayParameters;
use crate::rings::{total_instances, Ring};
use polarray_math::{Dir3, Transform, Vec3};
use rayon::prelude::*;
use std::f64::consts::PI;

/// One placed instance of the base shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    /// Ring this instance belongs to.
    pub ring: usize,
    /// Element index within the ring, angle-ascending.
    pub element: usize,
    /// Rotation angle about the axis in radians, measured from the fixed
    /// reference direction.
    pub angle: f64,
    /// Rigid transform mapping the base shape onto this instance.
    pub transform: Transform,
}

/// Projected instance count above which rings are placed in parallel.
const PARALLEL_THRESHOLD: usize = 4096;

/// Generate the full placement list, ring-major and angle-ascending.
///
/// This ordering is an API contract: it fixes fuse pairing order and
/// linked-array indexing. Ring 0 / element 0 is exactly
/// [`Transform::identity`] so the original coincides with the unmodified
/// base shape.
///
/// Large arrays fan the per-ring work out across rayon workers; per-ring
/// results are flattened sequentially afterwards, so the canonical order
/// is preserved regardless of execution order.
pub fn generate(params: &ArrayParameters, rings: &[Ring]) -> Vec<Placement> {
    let total = total_instances(rings);
    let reference = reference_direction(params.axis());

    if total >= PARALLEL_THRESHOLD {
        let per_ring: Vec<Vec<Placement>> = rings
            .par_iter()
            .map(|ring| ring_placements(params, &reference, ring))
            .collect();
        let mut out = Vec::with_capacity(total);
        for mut chunk in per_ring {
            out.append(&mut chunk);
        }
        out
    } else {
        let mut out = Vec::with_capacity(total);
        for ring in rings {
            out.extend(ring_placements(params, &reference, ring));
        }
        out
    }
}

fn ring_placements(params: &ArrayParameters, reference: &Vec3, ring: &Ring) -> Vec<Placement> {
    let step = 2.0 * PI / ring.count as f64;
    let mut out = Vec::with_capacity(ring.count);
    for element in 0..ring.count {
        let angle = element as f64 * step;
        out.push(Placement {
            ring: ring.index,
            element,
            angle,
            transform: placement_transform(params, reference, ring.radius, angle),
        });
    }
    out
}

/// Rigid transform for one placement: rotate by `angle` about the axis
/// through the center, then translate radially outward along the rotated
/// reference direction. The shape rotates with its placement; it is not
/// re-leveled to face the center.
fn placement_transform(
    params: &ArrayParameters,
    reference: &Vec3,
    radius: f64,
    angle: f64,
) -> Transform {
    // The original must coincide exactly with the base shape.
    if radius == 0.0 && angle == 0.0 {
        return Transform::identity();
    }
    let spin = Transform::rotation_about_line(&params.center(), params.axis(), angle);
    let radial = spin.apply_vec(reference) * radius;
    Transform::translation(radial).then(&spin)
}

/// Fixed reference direction orthogonal to the rotation axis (angle zero).
///
/// Picks the global axis least aligned with the rotation axis and projects
/// it into the rotation plane; for a +Z axis this yields +X. Deterministic
/// so recomputes are bit-identical.
pub(crate) fn reference_direction(axis: &Dir3) -> Vec3 {
    let a = axis.as_ref();
    let seed = if a.x.abs() <= a.y.abs() && a.x.abs() <= a.z.abs() {
        Vec3::x()
    } else if a.y.abs() <= a.z.abs() {
        Vec3::y()
    } else {
        Vec3::z()
    };
    (seed - a * seed.dot(a)).normalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rings::distribute;
    use approx::assert_relative_eq;
    use polarray_math::{Point3, Tolerance};

    fn params(
        radial: f64,
        tangential: f64,
        ring_count: u32,
        symmetry: u32,
        center: Point3,
    ) -> ArrayParameters {
        ArrayParameters::new(
            radial,
            tangential,
            ring_count,
            symmetry,
            center,
            Vec3::z(),
            false,
            false,
        )
        .unwrap()
    }

    #[test]
    fn test_first_placement_is_exact_identity() {
        let p = params(200.0, 100.0, 3, 1, Point3::new(7.0, -3.0, 2.0));
        let placements = generate(&p, &distribute(&p));
        assert_eq!(placements[0].ring, 0);
        assert_eq!(placements[0].element, 0);
        assert_eq!(placements[0].angle, 0.0);
        assert_eq!(placements[0].transform, Transform::identity());
    }

    #[test]
    fn test_ring_major_angle_ascending_order() {
        let p = params(50.0, 30.0, 4, 2, Point3::origin());
        let placements = generate(&p, &distribute(&p));
        for pair in placements.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!(
                a.ring < b.ring || (a.ring == b.ring && a.angle < b.angle),
                "order violated between ({}, {}) and ({}, {})",
                a.ring,
                a.element,
                b.ring,
                b.element
            );
        }
    }

    #[test]
    fn test_total_count_matches_ring_table() {
        let p = params(200.0, 100.0, 3, 1, Point3::origin());
        let rings = distribute(&p);
        let placements = generate(&p, &rings);
        assert_eq!(placements.len(), total_instances(&rings));
        assert_eq!(placements.len(), 39);
    }

    #[test]
    fn test_recompute_is_bit_identical() {
        let p = params(37.5, 11.25, 5, 3, Point3::new(1.0, 2.0, 3.0));
        let rings = distribute(&p);
        let first = generate(&p, &rings);
        let second = generate(&p, &rings);
        assert_eq!(first, second);
    }

    #[test]
    fn test_positions_on_ring_around_z() {
        // symmetry=4 with an oversized tangential distance forces exactly
        // 4 elements on ring 1 at angles 0, π/2, π, 3π/2.
        let p = params(10.0, 1000.0, 2, 4, Point3::origin());
        let placements = generate(&p, &distribute(&p));
        assert_eq!(placements.len(), 5);

        let tol = Tolerance::DEFAULT;
        let origin = Point3::origin();
        let expected = [
            Point3::new(10.0, 0.0, 0.0),
            Point3::new(0.0, 10.0, 0.0),
            Point3::new(-10.0, 0.0, 0.0),
            Point3::new(0.0, -10.0, 0.0),
        ];
        for (placement, want) in placements[1..].iter().zip(expected.iter()) {
            let got = placement.transform.apply_point(&origin);
            assert!(tol.points_equal(&got, want), "got {got}, want {want}");
        }
    }

    #[test]
    fn test_offset_center_orbits_around_center() {
        // Base point sitting on the center maps to center + radius along
        // the rotated reference direction.
        let center = Point3::new(5.0, 0.0, 0.0);
        let p = params(10.0, 1000.0, 2, 4, center);
        let placements = generate(&p, &distribute(&p));
        let tol = Tolerance::DEFAULT;
        // ring 1, element 2 sits at angle π: center + 10·(-X)
        let placed = &placements[3];
        assert!(tol.angles_equal(placed.angle, std::f64::consts::PI));
        let got = placed.transform.apply_point(&center);
        assert!(tol.points_equal(&got, &Point3::new(-5.0, 0.0, 0.0)));
    }

    #[test]
    fn test_inverse_returns_each_instance_to_base() {
        // Every placement transform is rigid, so its inverse must map the
        // placed copy back onto the base exactly (within tolerance).
        let p = params(10.0, 1000.0, 3, 4, Point3::new(2.0, -1.0, 3.0));
        let placements = generate(&p, &distribute(&p));
        let tol = Tolerance::DEFAULT;
        let probe = Point3::new(4.0, 5.0, -6.0);
        for placement in &placements {
            let placed = placement.transform.apply_point(&probe);
            let back = placement.transform.inverse().apply_point(&placed);
            assert!(tol.points_equal(&back, &probe), "ring {}", placement.ring);
        }
    }

    #[test]
    fn test_orientation_rotates_with_placement() {
        // Standard polar-array semantics: the shape rotates with its
        // placement instead of keeping its world orientation.
        let p = params(10.0, 1000.0, 2, 4, Point3::origin());
        let placements = generate(&p, &distribute(&p));
        // element at angle π/2 maps +X to +Y
        let quarter = &placements[2];
        let rotated = quarter.transform.apply_vec(&Vec3::x());
        assert_relative_eq!(rotated.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(rotated.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_radial_distance_pure_rotations() {
        // Collapsed rings still spin copies about the axis.
        let p = params(0.0, 20.0, 2, 4, Point3::origin());
        let placements = generate(&p, &distribute(&p));
        assert_eq!(placements.len(), 5);
        let probe = Point3::new(3.0, 0.0, 0.0);
        let got = placements[2].transform.apply_point(&probe);
        // angle π/2 about Z: (3,0,0) → (0,3,0)
        assert_relative_eq!(got.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(got.y, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_reference_direction_orthogonal_to_axis() {
        for axis in [
            Vec3::z(),
            Vec3::x(),
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(-0.2, 0.9, 0.4),
        ] {
            let dir = Dir3::new_normalize(axis);
            let reference = reference_direction(&dir);
            assert_relative_eq!(reference.norm(), 1.0, epsilon = 1e-12);
            assert_relative_eq!(reference.dot(dir.as_ref()), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_reference_direction_for_z_axis_is_x() {
        let reference = reference_direction(&Dir3::new_normalize(Vec3::z()));
        assert_relative_eq!(reference.x, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_parallel_path_preserves_order() {
        // Enough instances to cross the rayon threshold; the result must
        // be identical to what the ring table dictates element by element.
        let p = params(10.0, 0.05, 6, 1, Point3::origin());
        let rings = distribute(&p);
        assert!(total_instances(&rings) >= PARALLEL_THRESHOLD);
        let placements = generate(&p, &rings);
        assert_eq!(placements.len(), total_instances(&rings));
        let mut i = 0;
        for ring in &rings {
            for element in 0..ring.count {
                assert_eq!(placements[i].ring, ring.index);
                assert_eq!(placements[i].element, element);
                i += 1;
            }
        }
    }
}
