//! Geometry boundary: the external geometry-kernel capability.

use polarray_math::Transform;
use thiserror::Error;

/// A boolean union step failed inside the geometry kernel.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{0}")]
pub struct UnionError(pub String);

/// Capability interface to the geometry kernel.
///
/// The realizer is written against this trait so kernel implementations
/// can be swapped (or stubbed in tests) without touching ring distribution
/// or placement generation. Implementations are not assumed re-entrant;
/// the realizer calls `union` strictly sequentially.
pub trait GeometryBoundary {
    /// Shape type owned by the kernel.
    type Shape;

    /// Deep-copy a shape.
    fn copy(&self, shape: &Self::Shape) -> Self::Shape;

    /// Apply a rigid transform, returning the transformed copy.
    fn transformed(&self, shape: &Self::Shape, transform: &Transform) -> Self::Shape;

    /// Boolean union of two shapes.
    fn union(&self, a: &Self::Shape, b: &Self::Shape) -> Result<Self::Shape, UnionError>;

    /// Whether the shape is a closed solid (fusable).
    fn is_solid(&self, shape: &Self::Shape) -> bool;
}
