//! Which faces the renderer draws at full brightness.

use cgmath::{InnerSpace, Point3, Vector3};

use crate::face::Face;

/// Distance from the cube centre to each face plane.
pub const HALF_EXTENT: f32 = 1.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FacingMode {
    /// A face is active when the camera is on its outer side.
    Camera,
    /// Top, front and left are always active, whatever the camera does.
    Fixed,
}

/// Per-face active flags, indexed by [`Face::index`].
pub type Facing = [bool; 6];

const FIXED: Facing = [true, false, true, false, true, false];

pub fn facing(mode: FacingMode, eye: Point3<f32>) -> Facing {
    match mode {
        FacingMode::Camera => Face::ALL.map(|face| faces_camera(face, eye)),
        FacingMode::Fixed => FIXED,
    }
}

fn faces_camera(face: Face, eye: Point3<f32>) -> bool {
    let axis = normal(face);
    let centre = Point3::new(0.0, 0.0, 0.0) + axis * HALF_EXTENT;
    (eye - centre).dot(axis) > 0.0
}

/// The outward normal of `face` as a float vector.
pub fn normal(face: Face) -> Vector3<f32> {
    face.normal().map(|c| c as f32)
}
