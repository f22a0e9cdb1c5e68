//! Validated, immutable array parameters.

use crate::error::{ArrayError, Result};
use polarray_math::{Dir3, Point3, Tolerance, Vec3};

/// How the realized array is represented.
///
/// The `fuse`/`link_array` flag pair admits an invalid fourth combination,
/// so it is resolved into this closed set at construction: when both flags
/// are set, `Linked` wins and the caller receives a [`ModeNotice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Independent transformed copies grouped together; no boolean applied.
    Compound,
    /// One solid, the boolean union of all placed copies.
    Fused,
    /// One shared base shape plus per-instance transforms.
    Linked,
}

/// Warning-level notices produced while resolving parameters.
///
/// Notices never prevent a valid result; they are surfaced so the caller
/// can inform the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeNotice {
    /// Both `fuse` and `link_array` were requested; the linked array takes
    /// precedence and fuse was ignored.
    FuseIgnored,
}

impl std::fmt::Display for ModeNotice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModeNotice::FuseIgnored => {
                write!(f, "fuse ignored: link_array takes precedence")
            }
        }
    }
}

/// Immutable snapshot of circular-array parameters, validated at
/// construction.
///
/// One `ArrayParameters` is built per recompute request, consumed by the
/// ring distributor and placement generator, and discarded. It owns no
/// external resources.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayParameters {
    radial_distance: f64,
    tangential_distance: f64,
    ring_count: u32,
    symmetry: u32,
    center: Point3,
    axis: Dir3,
    mode: OutputMode,
    notice: Option<ModeNotice>,
}

impl ArrayParameters {
    /// Validate and freeze a parameter set.
    ///
    /// # Arguments
    ///
    /// * `radial_distance` - Spacing between successive rings; must be
    ///   finite and non-negative. Zero collapses all rings onto ring 0,
    ///   a degenerate but legal configuration.
    /// * `tangential_distance` - Target spacing between elements within a
    ///   ring; must be finite and non-zero.
    /// * `ring_count` - Total rings including the original; must be >= 2.
    /// * `symmetry` - Number of equal angular sectors; must be >= 1.
    /// * `center` - Point the rotation axis passes through.
    /// * `axis` - Direction of the rotation axis; normalized here, must
    ///   have non-negligible length.
    /// * `fuse`, `link_array` - Output-mode flags; if both are set the
    ///   linked array wins and [`ArrayParameters::notice`] reports it.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        radial_distance: f64,
        tangential_distance: f64,
        ring_count: u32,
        symmetry: u32,
        center: Point3,
        axis: Vec3,
        fuse: bool,
        link_array: bool,
    ) -> Result<Self> {
        if !radial_distance.is_finite() || radial_distance < 0.0 {
            return Err(ArrayError::InvalidParameter(format!(
                "radial distance must be finite and >= 0, got {radial_distance}"
            )));
        }
        if !tangential_distance.is_finite() || tangential_distance == 0.0 {
            return Err(ArrayError::InvalidParameter(format!(
                "tangential distance must be finite and non-zero, got {tangential_distance}"
            )));
        }
        if ring_count < 2 {
            return Err(ArrayError::InvalidParameter(format!(
                "ring count must be >= 2, got {ring_count}"
            )));
        }
        if symmetry < 1 {
            return Err(ArrayError::InvalidParameter(format!(
                "symmetry must be >= 1, got {symmetry}"
            )));
        }
        if !center.coords.iter().all(|c| c.is_finite()) {
            return Err(ArrayError::InvalidParameter(
                "center coordinates must be finite".to_string(),
            ));
        }
        // An axis shorter than the linear tolerance has no usable direction.
        let axis_norm = axis.norm();
        if !axis_norm.is_finite() || Tolerance::DEFAULT.is_zero(axis_norm) {
            return Err(ArrayError::InvalidParameter(
                "axis direction must have non-zero length".to_string(),
            ));
        }

        let (mode, notice) = match (fuse, link_array) {
            (true, true) => (OutputMode::Linked, Some(ModeNotice::FuseIgnored)),
            (false, true) => (OutputMode::Linked, None),
            (true, false) => (OutputMode::Fused, None),
            (false, false) => (OutputMode::Compound, None),
        };

        Ok(Self {
            radial_distance,
            tangential_distance,
            ring_count,
            symmetry,
            center,
            axis: Dir3::new_normalize(axis),
            mode,
            notice,
        })
    }

    /// Spacing between successive rings.
    pub fn radial_distance(&self) -> f64 {
        self.radial_distance
    }

    /// Target spacing between elements within a ring. The sign indicates
    /// winding direction; distribution uses the magnitude.
    pub fn tangential_distance(&self) -> f64 {
        self.tangential_distance
    }

    /// Total rings including the original (ring 0).
    pub fn ring_count(&self) -> u32 {
        self.ring_count
    }

    /// Number of equal angular sectors the circle is divided into.
    pub fn symmetry(&self) -> u32 {
        self.symmetry
    }

    /// Point the rotation axis passes through.
    pub fn center(&self) -> Point3 {
        self.center
    }

    /// Unit direction of the rotation axis.
    pub fn axis(&self) -> &Dir3 {
        &self.axis
    }

    /// Resolved output mode.
    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Warning-level notice raised while resolving the parameters, if any.
    pub fn notice(&self) -> Option<ModeNotice> {
        self.notice
    }
}
