use super::{Camera, Projection};
use crate::geom::Viewport;
use crate::input::FrameInput;
use crate::math;
use nalgebra as na;
use std::f32::consts::FRAC_PI_4;

/// Pitch stays this far short of straight up/down while clamping is on.
pub const MAX_PITCH: f32 = 89.0 * std::f32::consts::PI / 180.0;

/// WASD + mouse look camera.
#[derive(Clone, Debug, PartialEq)]
pub struct FirstPersonCamera {
	projection: Projection,
	view: na::Isometry3<f32>,
	position: na::Point3<f32>,
	yaw: f32,
	pitch: f32,
	clamp_pitch: bool,
	/// Radians of rotation per pixel of mouse movement.
	pub sensitivity: f32,
	/// World units moved per input sample.
	pub move_speed: f32,
}

impl Default for FirstPersonCamera {
	fn default() -> Self {
		Self::new(Viewport::default(), na::Point3::new(0.0, 0.0, 10.0), 0.0018, 0.5)
	}
}

impl Camera for FirstPersonCamera {
	fn position(&self) -> na::Point3<f32> {
		self.position
	}

	fn view(&self) -> na::Matrix4<f32> {
		self.view.to_homogeneous()
	}

	fn projection(&self) -> na::Matrix4<f32> {
		self.projection.matrix()
	}
}

impl FirstPersonCamera {
	pub fn new(viewport: Viewport, position: na::Point3<f32>, sensitivity: f32, move_speed: f32) -> Self {
		Self::with_projection(Projection::new(viewport, FRAC_PI_4), position, sensitivity, move_speed)
	}

	pub fn with_projection(projection: Projection, position: na::Point3<f32>, sensitivity: f32, move_speed: f32) -> Self {
		log::debug!("First person camera at {:?}", position);
		let mut camera = Self {
			projection,
			view: na::Isometry3::identity(),
			position,
			yaw: 0.0,
			pitch: 0.0,
			clamp_pitch: true,
			sensitivity,
			move_speed,
		};
		camera.update_view();
		camera
	}

	/// Disable to let pitch accumulate without bound. The view flips once the
	/// look direction passes vertical and is undefined exactly at it.
	pub fn set_clamp_pitch(&mut self, clamp: bool) {
		self.clamp_pitch = clamp;
		self.apply_pitch_limit();
		self.update_view();
	}

	pub fn clamps_pitch(&self) -> bool {
		self.clamp_pitch
	}

	/// Movement is applied once per input sample, `_elapsed` does not scale it.
	pub fn update(&mut self, _elapsed: f32, input: &FrameInput) {
		let forward = self.forward();
		let left = math::world_up().cross(&forward);
		let keys = &input.keys;

		if keys.forward {
			self.position += forward * self.move_speed;
		}
		if keys.back {
			self.position -= forward * self.move_speed;
		}
		if keys.left {
			self.position += left * self.move_speed;
		}
		if keys.right {
			self.position -= left * self.move_speed;
		}

		self.yaw += self.sensitivity * input.mouse.dx as f32;
		self.pitch += self.sensitivity * input.mouse.dy as f32;
		self.apply_pitch_limit();

		self.update_view();
	}

	/// Horizontal walking direction, ignores pitch.
	pub fn forward(&self) -> na::Vector3<f32> {
		math::rotate_y(self.yaw) * math::world_forward()
	}

	pub fn look_direction(&self) -> na::Vector3<f32> {
		math::rotate_y(self.yaw) * (math::rotate_x(self.pitch) * math::world_forward())
	}

	pub fn yaw(&self) -> f32 {
		self.yaw
	}

	pub fn pitch(&self) -> f32 {
		self.pitch
	}

	pub fn set_orientation(&mut self, yaw: f32, pitch: f32) {
		self.yaw = yaw;
		self.pitch = pitch;
		self.apply_pitch_limit();
		self.update_view();
	}

	pub fn teleport(&mut self, position: na::Point3<f32>) {
		self.position = position;
		self.update_view();
	}

	pub fn viewport(&self) -> Viewport {
		self.projection.viewport()
	}

	pub fn resize(&mut self, viewport: Viewport) {
		self.projection.resize(viewport);
	}

	fn apply_pitch_limit(&mut self) {
		if !self.clamp_pitch {
			return;
		}
		if self.pitch > MAX_PITCH || self.pitch < -MAX_PITCH {
			log::trace!("Clamping pitch {}", self.pitch);
			self.pitch = self.pitch.max(-MAX_PITCH).min(MAX_PITCH);
		}
	}

	fn update_view(&mut self) {
		let target = self.position + self.look_direction();
		self.view = math::look_at(&self.position, &target, &math::world_up());
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::geom::Position;
	use crate::input::{Movement, MouseDelta, MovementKeys};
	use approx::assert_relative_eq;
	use std::f32::consts::FRAC_PI_2;

	fn camera() -> FirstPersonCamera {
		FirstPersonCamera::new(Viewport::new(800, 600), na::Point3::new(0.0, 1.0, 10.0), 0.0018, 0.5)
	}

	fn keys(movements: &[Movement]) -> FrameInput {
		let keys = movements.iter().fold(MovementKeys::none(), |k, m| k.with(*m));
		FrameInput::new(keys, MouseDelta::default())
	}

	fn displacement(cam: &FirstPersonCamera, movements: &[Movement]) -> na::Vector3<f32> {
		let mut cam = cam.clone();
		let start = cam.position();
		cam.update(0.016, &keys(movements));
		cam.position() - start
	}

	#[test]
	fn starts_looking_down_negative_z() {
		let cam = camera();
		assert_relative_eq!(cam.look_direction(), na::Vector3::new(0.0, 0.0, -1.0));
		let ahead = cam.view().transform_point(&na::Point3::new(0.0, 1.0, 0.0));
		assert_relative_eq!(ahead, na::Point3::new(0.0, 0.0, -10.0), epsilon = 1e-5);
	}

	#[test]
	fn single_keys() {
		let cam = camera();
		assert_relative_eq!(displacement(&cam, &[Movement::Forward]), na::Vector3::new(0.0, 0.0, -0.5));
		assert_relative_eq!(displacement(&cam, &[Movement::Back]), na::Vector3::new(0.0, 0.0, 0.5));
		assert_relative_eq!(displacement(&cam, &[Movement::Left]), na::Vector3::new(-0.5, 0.0, 0.0));
		assert_relative_eq!(displacement(&cam, &[Movement::Right]), na::Vector3::new(0.5, 0.0, 0.0));
	}

	#[test]
	fn diagonal_is_sum_of_axes() {
		let mut cam = camera();
		cam.set_orientation(0.7, 0.0);

		let forward = displacement(&cam, &[Movement::Forward]);
		let right = displacement(&cam, &[Movement::Right]);
		let both = displacement(&cam, &[Movement::Forward, Movement::Right]);

		assert_relative_eq!(both, forward + right, epsilon = 1e-6);
		// Not normalized
		assert!(both.norm() > cam.move_speed * 1.4);
	}

	#[test]
	fn opposite_keys_cancel() {
		let cam = camera();
		let d = displacement(&cam, &[Movement::Forward, Movement::Back, Movement::Left, Movement::Right]);
		assert_relative_eq!(d, na::Vector3::zeros());
	}

	#[test]
	fn movement_follows_yaw_not_pitch() {
		let mut cam = camera();
		cam.set_orientation(FRAC_PI_2, 0.5);
		let d = displacement(&cam, &[Movement::Forward]);
		assert_relative_eq!(d, na::Vector3::new(-0.5, 0.0, 0.0), epsilon = 1e-6);
	}

	#[test]
	fn idle_frame_changes_nothing() {
		let mut cam = camera();
		cam.update(0.016, &FrameInput::new(MovementKeys::none().with(Movement::Forward), MouseDelta::new(12, -7)));
		let before = cam.clone();

		cam.update(0.016, &FrameInput::idle());

		assert_eq!(cam.position(), before.position());
		assert_eq!(cam.yaw(), before.yaw());
		assert_eq!(cam.pitch(), before.pitch());
		assert_eq!(cam.view(), before.view());
	}

	#[test]
	fn moving_mouse_left_increases_yaw() {
		let mut cam = camera();
		let mouse = MouseDelta::between(Position::new(500, 300), Position::new(400, 300));
		cam.update(0.016, &FrameInput::new(MovementKeys::none(), mouse));

		assert_relative_eq!(cam.yaw(), 0.18, epsilon = 1e-6);
		assert_eq!(cam.pitch(), 0.0);
		// Turned left
		assert!(cam.look_direction().x < 0.0);
	}

	#[test]
	fn moving_mouse_up_looks_up() {
		let mut cam = camera();
		cam.update(0.016, &FrameInput::new(MovementKeys::none(), MouseDelta::new(0, 100)));
		assert_relative_eq!(cam.pitch(), 0.18, epsilon = 1e-6);
		assert!(cam.look_direction().y > 0.0);
	}

	#[test]
	fn pitch_is_clamped() {
		let mut cam = camera();
		cam.update(0.016, &FrameInput::new(MovementKeys::none(), MouseDelta::new(0, 10_000)));
		assert_relative_eq!(cam.pitch(), MAX_PITCH);
		assert!(cam.view().iter().all(|v| v.is_finite()));

		cam.update(0.016, &FrameInput::new(MovementKeys::none(), MouseDelta::new(0, -20_000)));
		assert_relative_eq!(cam.pitch(), -MAX_PITCH);
		assert!(cam.view().iter().all(|v| v.is_finite()));
	}

	#[test]
	fn unclamped_pitch_accumulates() {
		let mut cam = camera();
		cam.set_clamp_pitch(false);
		cam.update(0.016, &FrameInput::new(MovementKeys::none(), MouseDelta::new(0, 1_000)));
		assert_relative_eq!(cam.pitch(), 1.8, epsilon = 1e-5);

		cam.set_clamp_pitch(true);
		assert_relative_eq!(cam.pitch(), MAX_PITCH);
	}

	#[test]
	fn yaw_is_unbounded() {
		let mut cam = camera();
		for _ in 0..10 {
			cam.update(0.016, &FrameInput::new(MovementKeys::none(), MouseDelta::new(1_000, 0)));
		}
		assert_relative_eq!(cam.yaw(), 18.0, epsilon = 1e-3);
	}

	#[test]
	fn view_is_recomputed_not_integrated() {
		let mut a = camera();
		let mut b = camera();
		let input = FrameInput::new(MovementKeys::none().with(Movement::Forward), MouseDelta::new(40, 15));
		for _ in 0..5 {
			a.update(0.016, &input);
		}
		b.teleport(a.position());
		b.set_orientation(a.yaw(), a.pitch());
		assert_relative_eq!(a.view(), b.view(), epsilon = 1e-6);
	}

	#[test]
	fn update_leaves_projection_alone() {
		let mut cam = camera();
		let proj = cam.projection();
		for i in 0..30 {
			cam.update(0.016, &FrameInput::new(MovementKeys::none().with(Movement::Left), MouseDelta::new(i, -i)));
		}
		assert_eq!(cam.projection(), proj);
	}
}
