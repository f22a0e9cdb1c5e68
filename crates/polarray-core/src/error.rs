//! Error types for array generation.

use thiserror::Error;

/// Errors produced by the circular-array pipeline.
///
/// Degenerate configurations (zero radial distance, minimal ring counts,
/// symmetry saturating a ring) are not errors; they produce valid, if
/// visually trivial, results.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArrayError {
    /// A parameter violated its invariant. Reported before any placement
    /// work begins; nothing is partially applied.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Fuse output was requested for a base shape that is not a closed
    /// solid. Reported before attempting any union.
    #[error("fuse requires a closed solid base shape")]
    UnsupportedGeometry,

    /// A boolean union step failed. The whole fuse is aborted; no partial
    /// fused result is returned, since skipping the failing pair would
    /// silently change the final topology.
    #[error("fusion failed at ring {ring}, element {element}: {reason}")]
    FusionFailed {
        /// Ring index of the placement whose union step failed.
        ring: usize,
        /// Element index within that ring.
        element: usize,
        /// Kernel-reported failure reason.
        reason: String,
    },
}

/// Result type for array operations.
pub type Result<T> = std::result::Result<T, ArrayError>;
