#![warn(missing_docs)]

//! Math types for the polarray circular-array engine.
//!
//! The placement pipeline only ever rotates about an axis through a center
//! point and translates radially outward, so [`Transform`] is rigid by
//! construction: a 3x3 rotation block plus a translation vector, not a
//! general 4x4 affine matrix. Rigidity buys closed-form composition, an
//! inverse that is just a transposed rotation block, and handedness that
//! never flips.

use nalgebra::{Matrix3, Unit, Vector3};

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A unit (normalized) direction vector in 3D space.
pub type Dir3 = Unit<Vector3<f64>>;

/// A rigid transform: rotation followed by translation.
///
/// `apply_point` computes `R·p + t`. Every transform the placement
/// pipeline produces is built from [`Transform::rotation_about_line`] and
/// [`Transform::translation`], so the rotation block stays orthonormal
/// with determinant +1 and the transform is always invertible.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    rotation: Matrix3<f64>,
    translation: Vec3,
}

impl Transform {
    /// Identity transform.
    pub fn identity() -> Self {
        Self {
            rotation: Matrix3::identity(),
            translation: Vec3::zeros(),
        }
    }

    /// Pure translation by `offset`.
    pub fn translation(offset: Vec3) -> Self {
        Self {
            rotation: Matrix3::identity(),
            translation: offset,
        }
    }

    /// Rotation by `angle` radians about the line through `center` along
    /// `axis`.
    ///
    /// This is the one rotation a circular array ever makes: the rotation
    /// block comes from Rodrigues' formula and the translation folds in
    /// the conjugation by the center, `t = c - R·c`, so points on the line
    /// are fixed. At `angle == 0` the result is the exact identity (no
    /// rounding), which keeps the original placement bit-identical to the
    /// base shape.
    pub fn rotation_about_line(center: &Point3, axis: &Dir3, angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let t = 1.0 - c;
        let (x, y, z) = (axis.as_ref().x, axis.as_ref().y, axis.as_ref().z);
        #[rustfmt::skip]
        let rotation = Matrix3::new(
            t * x * x + c,      t * x * y - s * z,  t * x * z + s * y,
            t * x * y + s * z,  t * y * y + c,      t * y * z - s * x,
            t * x * z - s * y,  t * y * z + s * x,  t * z * z + c,
        );
        let translation = center.coords - rotation * center.coords;
        Self {
            rotation,
            translation,
        }
    }

    /// Compose: `a.then(&b)` applies `b` first, then `a`.
    pub fn then(&self, other: &Transform) -> Self {
        Self {
            rotation: self.rotation * other.rotation,
            translation: self.rotation * other.translation + self.translation,
        }
    }

    /// Transform a point: `R·p + t`.
    pub fn apply_point(&self, p: &Point3) -> Point3 {
        Point3::from(self.rotation * p.coords + self.translation)
    }

    /// Transform a direction vector (rotation only, no translation).
    pub fn apply_vec(&self, v: &Vec3) -> Vec3 {
        self.rotation * v
    }

    /// Inverse transform.
    ///
    /// Rigid transforms are always invertible: the rotation block is
    /// orthonormal, so the inverse is `(Rᵀ, -Rᵀ·t)` with no matrix
    /// inversion involved.
    pub fn inverse(&self) -> Self {
        let rt = self.rotation.transpose();
        Self {
            rotation: rt,
            translation: -(rt * self.translation),
        }
    }
}

/// Tolerances for deciding when placement geometry coincides.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Linear distance tolerance in mm.
    pub linear: f64,
    /// Angular tolerance in radians.
    pub angular: f64,
}

impl Tolerance {
    /// Default CAD tolerances (1e-6 mm linear, 1e-9 rad angular).
    pub const DEFAULT: Self = Self {
        linear: 1e-6,
        angular: 1e-9,
    };

    /// Whether two points coincide within the linear tolerance.
    pub fn points_equal(&self, a: &Point3, b: &Point3) -> bool {
        (a - b).norm() < self.linear
    }

    /// Whether a distance is effectively zero.
    pub fn is_zero(&self, d: f64) -> bool {
        d.abs() < self.linear
    }

    /// Whether two angles (radians) are effectively equal.
    pub fn angles_equal(&self, a: f64, b: f64) -> bool {
        (a - b).abs() < self.angular
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}
