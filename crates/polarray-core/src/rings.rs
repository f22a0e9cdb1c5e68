//! Ring distributor: per-ring radii and element counts.

use crate::params::ArrayParameters;
use std::f64::consts::PI;

/// One concentric ring of the array.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    /// Ring index; ring 0 is the original at the center.
    pub index: usize,
    /// Distance from the center: `index * radial_distance`.
    pub radius: f64,
    /// Number of elements in this ring.
    pub count: usize,
}

/// Compute the ring table for the given parameters.
///
/// Ring 0 always holds exactly one element (the original), regardless of
/// tangential distance or symmetry — a ring of radius zero has no
/// circumference to subdivide. For outer rings the element count per
/// angular sector is `round(sector_circumference / |tangential|)` with a
/// floor of 1, replicated `symmetry` times, so even a ring too small to
/// fit one tangential step yields exactly `symmetry` evenly spaced
/// elements.
///
/// Coincident radii from a zero radial distance are legal and are never
/// merged; the user chose the degenerate layout.
pub fn distribute(params: &ArrayParameters) -> Vec<Ring> {
    let symmetry = params.symmetry() as usize;
    let tangential = params.tangential_distance().abs();

    let mut rings = Vec::with_capacity(params.ring_count() as usize);
    rings.push(Ring {
        index: 0,
        radius: 0.0,
        count: 1,
    });
    for index in 1..params.ring_count() as usize {
        let radius = index as f64 * params.radial_distance();
        let sector_circumference = 2.0 * PI * radius / symmetry as f64;
        let per_sector = ((sector_circumference / tangential).round() as usize).max(1);
        rings.push(Ring {
            index,
            radius,
            count: per_sector * symmetry,
        });
    }
    rings
}

/// Total number of placed instances across all rings.
pub fn total_instances(rings: &[Ring]) -> usize {
    rings.iter().map(|r| r.count).sum()
}
