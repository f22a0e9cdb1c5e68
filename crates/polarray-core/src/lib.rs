#![warn(missing_docs)]

//! Circular (polar) array placement and realization engine.
//!
//! Given a validated parameter snapshot and a base shape, computes the
//! rigid-body placements of copies arranged in concentric rings around an
//! axis, and materializes them as a plain compound, a fused solid, or a
//! geometry-sharing linked array.
//!
//! The pipeline is single-pass and synchronous:
//!
//! ```text
//! ArrayParameters → distribute (rings) → generate (placements) → realize
//! ```
//!
//! Geometry-kernel work (copy, rigid transform, boolean union) happens
//! behind the [`GeometryBoundary`] trait so kernels are swappable and the
//! placement math stays kernel-agnostic.

mod boundary;
mod error;
mod params;
mod placement;
mod realize;
mod rings;

pub use boundary::{GeometryBoundary, UnionError};
pub use error::{ArrayError, Result};
pub use params::{ArrayParameters, ModeNotice, OutputMode};
pub use placement::{generate, Placement};
pub use realize::{realize, ArrayOutcome, ArrayResult, LinkedArray};
pub use rings::{distribute, total_instances, Ring};
