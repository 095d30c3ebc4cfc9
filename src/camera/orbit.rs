use super::{Camera, Projection};
use crate::geom::Viewport;
use crate::math;
use nalgebra as na;
use std::f32::consts::FRAC_PI_4;

/// Circles the world origin at a fixed radius and height.
///
/// The eye never moves: each update composes a rotation about +Y in front of
/// a fixed look-at, which spins the world underneath the camera. Seen through
/// the lens that is the camera revolving around the origin.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitCamera {
	projection: Projection,
	initial_position: na::Point3<f32>,
	look_at: na::Isometry3<f32>,
	view: na::Isometry3<f32>,
	angle: f32,
	speed: f32,
}

impl Default for OrbitCamera {
	fn default() -> Self {
		Self::new(Viewport::default(), na::Point3::new(0.0, 10.0, 10.0), 1.0)
	}
}

impl Camera for OrbitCamera {
	fn position(&self) -> na::Point3<f32> {
		self.view.inverse_transform_point(&na::Point3::origin())
	}

	fn view(&self) -> na::Matrix4<f32> {
		self.view.to_homogeneous()
	}

	fn projection(&self) -> na::Matrix4<f32> {
		self.projection.matrix()
	}
}

impl OrbitCamera {
	/// `speed` is in radians per second.
	pub fn new(viewport: Viewport, position: na::Point3<f32>, speed: f32) -> Self {
		Self::with_projection(Projection::new(viewport, FRAC_PI_4), position, speed)
	}

	pub fn with_projection(projection: Projection, position: na::Point3<f32>, speed: f32) -> Self {
		log::debug!("Orbit camera at {:?}, {} rad/s", position, speed);
		let look_at = math::look_at(&position, &na::Point3::origin(), &math::world_up());
		Self {
			projection,
			initial_position: position,
			look_at,
			view: look_at,
			angle: 0.0,
			speed,
		}
	}

	pub fn update(&mut self, elapsed: f32) {
		self.angle += self.speed * elapsed;
		self.view = self.look_at * na::Isometry3::from_parts(na::Translation3::identity(), math::rotate_y(self.angle));
	}

	pub fn angle(&self) -> f32 {
		self.angle
	}

	pub fn speed(&self) -> f32 {
		self.speed
	}

	pub fn set_speed(&mut self, speed: f32) {
		self.speed = speed;
	}

	pub fn initial_position(&self) -> na::Point3<f32> {
		self.initial_position
	}

	/// Distance from the eye to the origin. Constant for the camera's lifetime.
	pub fn radius(&self) -> f32 {
		self.initial_position.coords.norm()
	}

	pub fn viewport(&self) -> Viewport {
		self.projection.viewport()
	}

	pub fn resize(&mut self, viewport: Viewport) {
		self.projection.resize(viewport);
	}
}
