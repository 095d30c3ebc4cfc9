use camrig::{Camera, CameraSettings, Viewport};
use flexi_logger::{colored_default_format, Logger};
use std::error::Error;
use std::path::Path;

const FPS: u32 = 30;
const FRAMES: u32 = 95;

fn main() -> Result<(), Box<dyn Error>> {
	let _logger = Logger::try_with_env_or_str("info")?
		.format(colored_default_format)
		.start()?;

	// Optional preset file as the first argument
	let settings = match std::env::args().nth(1) {
		Some(path) => CameraSettings::load(Path::new(&path))?,
		None => CameraSettings::default(),
	};

	let mut camera = settings.orbit_camera(Viewport::new(800, 600))?;
	let dt = 1.0 / FPS as f32;

	// Fixed timestep, roughly half an orbit at the default speed
	for frame in 0..FRAMES {
		camera.update(dt);
		let eye = camera.position();
		log::info!(
			"frame {:>3} angle {:.3} eye ({:.2}, {:.2}, {:.2})",
			frame,
			camera.angle(),
			eye.x,
			eye.y,
			eye.z
		);
	}

	log::debug!("view projection: {}", camera.view_projection());
	Ok(())
}
