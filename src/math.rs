//! Thin helpers over nalgebra naming the handful of transforms the cameras are built from.
//!
//! Everything here is right handed with +Y up and -Z forward.
use nalgebra as na;

pub const NEAR_PLANE: f32 = 1.0;
pub const FAR_PLANE: f32 = 1000.0;

pub fn world_up() -> na::Vector3<f32> {
	na::Vector3::y()
}

pub fn world_forward() -> na::Vector3<f32> {
	-na::Vector3::z()
}

pub fn rotate_x(angle: f32) -> na::UnitQuaternion<f32> {
	na::UnitQuaternion::from_axis_angle(&na::Vector3::x_axis(), angle)
}

pub fn rotate_y(angle: f32) -> na::UnitQuaternion<f32> {
	na::UnitQuaternion::from_axis_angle(&na::Vector3::y_axis(), angle)
}

/// World to eye transform for a camera at `eye` looking at `target`.
///
/// Degenerates when `target - eye` is parallel to `up`.
pub fn look_at(eye: &na::Point3<f32>, target: &na::Point3<f32>, up: &na::Vector3<f32>) -> na::Isometry3<f32> {
	na::Isometry3::look_at_rh(eye, target, up)
}

/// `fov` is the vertical field of view in radians.
pub fn perspective_fov(fov: f32, aspect: f32, near: f32, far: f32) -> na::Perspective3<f32> {
	na::Perspective3::new(aspect, fov, near, far)
}
