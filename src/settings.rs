//! Camera presets stored as TOML.
//!
//! Every section falls back to its defaults, so a preset only has to name
//! the values it changes:
//!
//! ```toml
//! [first_person]
//! sensitivity = 0.003
//! ```
use crate::camera::{FirstPersonCamera, OrbitCamera, Projection};
use crate::error::CameraError;
use crate::geom::Viewport;
use crate::math::{FAR_PLANE, NEAR_PLANE};
use nalgebra as na;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionSettings {
	/// Vertical field of view in degrees.
	pub fov_degrees: f32,
	pub near: f32,
	pub far: f32,
}

impl Default for ProjectionSettings {
	fn default() -> Self {
		Self {
			fov_degrees: 45.0,
			near: NEAR_PLANE,
			far: FAR_PLANE,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitSettings {
	pub position: [f32; 3],
	/// Radians per second.
	pub speed: f32,
}

impl Default for OrbitSettings {
	fn default() -> Self {
		Self {
			position: [0.0, 10.0, 10.0],
			speed: 1.0,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FirstPersonSettings {
	pub position: [f32; 3],
	/// Radians per pixel.
	pub sensitivity: f32,
	/// World units per input sample.
	pub move_speed: f32,
	pub clamp_pitch: bool,
}

impl Default for FirstPersonSettings {
	fn default() -> Self {
		Self {
			position: [0.0, 0.0, 10.0],
			sensitivity: 0.0018,
			move_speed: 0.5,
			clamp_pitch: true,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
	pub projection: ProjectionSettings,
	pub orbit: OrbitSettings,
	pub first_person: FirstPersonSettings,
}

impl CameraSettings {
	pub fn from_toml_str(content: &str) -> Result<Self, CameraError> {
		let settings: Self = toml::from_str(content).map_err(|e| CameraError::SettingsParse(e.to_string()))?;
		settings.validate()?;
		Ok(settings)
	}

	pub fn to_toml_string(&self) -> Result<String, CameraError> {
		toml::to_string_pretty(self).map_err(|e| CameraError::SettingsParse(e.to_string()))
	}

	pub fn load(path: &Path) -> Result<Self, CameraError> {
		log::debug!("Loading camera settings: {}", path.display());
		let content = std::fs::read_to_string(path)?;
		Self::from_toml_str(&content)
	}

	pub fn save(&self, path: &Path) -> Result<(), CameraError> {
		log::debug!("Saving camera settings: {}", path.display());
		let content = self.to_toml_string()?;
		if let Some(parent) = path.parent() {
			std::fs::create_dir_all(parent)?;
		}
		std::fs::write(path, content)?;
		Ok(())
	}

	pub fn validate(&self) -> Result<(), CameraError> {
		let proj = &self.projection;
		if !(proj.fov_degrees > 0.0 && proj.fov_degrees < 180.0) {
			return Err(invalid(format!(
				"field of view must be between 0 and 180 degrees, got {}",
				proj.fov_degrees
			)));
		}
		if !(proj.near > 0.0 && proj.near < proj.far && proj.far.is_finite()) {
			return Err(invalid(format!(
				"clip planes must satisfy 0 < near < far, got near={} far={}",
				proj.near, proj.far
			)));
		}

		let orbit = &self.orbit;
		if !all_finite(&orbit.position) || !orbit.speed.is_finite() {
			return Err(invalid("orbit values must be finite".into()));
		}
		if orbit.position[0] == 0.0 && orbit.position[2] == 0.0 {
			return Err(invalid("orbit position can't sit on the vertical axis".into()));
		}

		let fp = &self.first_person;
		if !all_finite(&fp.position) || !fp.sensitivity.is_finite() || !fp.move_speed.is_finite() {
			return Err(invalid("first person values must be finite".into()));
		}

		Ok(())
	}

	pub fn projection(&self, viewport: Viewport) -> Projection {
		let proj = &self.projection;
		Projection::with_planes(viewport, proj.fov_degrees.to_radians(), proj.near, proj.far)
	}

	pub fn orbit_camera(&self, viewport: Viewport) -> Result<OrbitCamera, CameraError> {
		self.check_viewport(viewport)?;
		Ok(OrbitCamera::with_projection(
			self.projection(viewport),
			point(&self.orbit.position),
			self.orbit.speed,
		))
	}

	pub fn first_person_camera(&self, viewport: Viewport) -> Result<FirstPersonCamera, CameraError> {
		self.check_viewport(viewport)?;
		let fp = &self.first_person;
		let mut camera = FirstPersonCamera::with_projection(
			self.projection(viewport),
			point(&fp.position),
			fp.sensitivity,
			fp.move_speed,
		);
		camera.set_clamp_pitch(fp.clamp_pitch);
		Ok(camera)
	}

	fn check_viewport(&self, viewport: Viewport) -> Result<(), CameraError> {
		self.validate()?;
		if viewport.is_empty() {
			return Err(invalid(format!("viewport {}x{} is empty", viewport.width, viewport.height)));
		}
		Ok(())
	}
}

fn invalid(msg: String) -> CameraError {
	CameraError::InvalidSettings(msg)
}

fn all_finite(v: &[f32; 3]) -> bool {
	v.iter().all(|c| c.is_finite())
}

fn point(v: &[f32; 3]) -> na::Point3<f32> {
	na::Point3::new(v[0], v[1], v[2])
}
