//! TOML parameter file for the CLI.

use anyhow::Result;
use polarray::{make_cube, make_cylinder, make_panel, ArrayParameters, Point3, TriangleMesh, Vec3};
use serde::Deserialize;

/// On-disk array description.
///
/// ```toml
/// radial_distance = 200.0
/// tangential_distance = 100.0
/// ring_count = 3
/// symmetry = 1
/// center = [0.0, 0.0, 0.0]
/// axis = [0.0, 0.0, 1.0]
/// fuse = true
///
/// [base]
/// kind = "cube"
/// size = [10.0, 10.0, 10.0]
/// ```
#[derive(Debug, Deserialize)]
pub struct ArrayFile {
    pub radial_distance: f64,
    pub tangential_distance: f64,
    pub ring_count: u32,
    pub symmetry: u32,
    #[serde(default = "default_center")]
    pub center: [f64; 3],
    #[serde(default = "default_axis")]
    pub axis: [f64; 3],
    #[serde(default)]
    pub fuse: bool,
    #[serde(default)]
    pub link_array: bool,
    pub base: Option<BaseShape>,
}

fn default_center() -> [f64; 3] {
    [0.0, 0.0, 0.0]
}

fn default_axis() -> [f64; 3] {
    [0.0, 0.0, 1.0]
}

fn default_segments() -> u32 {
    32
}

/// Base shape realized as a mesh primitive.
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum BaseShape {
    /// Axis-aligned box with corner at origin.
    Cube { size: [f64; 3] },
    /// Cylinder along +Z with base at the origin plane.
    Cylinder {
        radius: f64,
        height: f64,
        #[serde(default = "default_segments")]
        segments: u32,
    },
    /// Open rectangular panel (not fusable; handy for dry runs).
    Panel { width: f64, height: f64 },
}

impl ArrayFile {
    /// Validate into engine parameters.
    pub fn to_parameters(&self) -> Result<ArrayParameters> {
        let params = ArrayParameters::new(
            self.radial_distance,
            self.tangential_distance,
            self.ring_count,
            self.symmetry,
            Point3::new(self.center[0], self.center[1], self.center[2]),
            Vec3::new(self.axis[0], self.axis[1], self.axis[2]),
            self.fuse,
            self.link_array,
        )?;
        Ok(params)
    }

    /// Build the base mesh; defaults to a 10mm cube when unspecified.
    pub fn base_mesh(&self) -> TriangleMesh {
        match &self.base {
            Some(BaseShape::Cube { size }) => make_cube(size[0], size[1], size[2]),
            Some(BaseShape::Cylinder {
                radius,
                height,
                segments,
            }) => make_cylinder(*radius, *height, *segments),
            Some(BaseShape::Panel { width, height }) => make_panel(*width, *height),
            None => make_cube(10.0, 10.0, 10.0),
        }
    }
}
