use crate::geom::Viewport;
use crate::math::{self, FAR_PLANE, NEAR_PLANE};
use nalgebra as na;

/// Perspective lens shared by both cameras. Only rebuilt on `resize`.
#[derive(Clone, Debug, PartialEq)]
pub struct Projection {
	fov: f32,
	near: f32,
	far: f32,
	viewport: Viewport,
	perspective: na::Perspective3<f32>,
}

impl Projection {
	/// `fov` is the vertical field of view in radians.
	pub fn new(viewport: Viewport, fov: f32) -> Self {
		Self::with_planes(viewport, fov, NEAR_PLANE, FAR_PLANE)
	}

	pub fn with_planes(viewport: Viewport, fov: f32, near: f32, far: f32) -> Self {
		Self {
			fov,
			near,
			far,
			viewport,
			perspective: math::perspective_fov(fov, viewport.aspect_ratio(), near, far),
		}
	}

	pub fn fov(&self) -> f32 {
		self.fov
	}

	pub fn near(&self) -> f32 {
		self.near
	}

	pub fn far(&self) -> f32 {
		self.far
	}

	pub fn viewport(&self) -> Viewport {
		self.viewport
	}

	pub fn aspect_ratio(&self) -> f32 {
		self.perspective.aspect()
	}

	pub fn matrix(&self) -> na::Matrix4<f32> {
		self.perspective.to_homogeneous()
	}

	pub fn resize(&mut self, viewport: Viewport) {
		log::debug!("Resizing projection: {}x{}", viewport.width, viewport.height);
		self.viewport = viewport;
		self.perspective = math::perspective_fov(self.fov, viewport.aspect_ratio(), self.near, self.far);
	}
}
