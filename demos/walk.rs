use camrig::{sample_mouse, Camera, CameraError, CameraSettings, CursorDevice, FirstPersonCamera, FrameInput};
use camrig::{Movement, MovementKeys, Position, Viewport};
use flexi_logger::{colored_default_format, Logger};
use std::collections::HashSet;
use std::error::Error;
use std::time::Instant;
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalPosition};
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;

/// The window warps the pointer, cursor events tell us where it is.
struct WindowCursor<'a> {
	window: &'a Window,
	position: &'a mut Position,
}

impl CursorDevice for WindowCursor<'_> {
	fn cursor_position(&self) -> Position {
		*self.position
	}

	fn set_cursor_position(&mut self, position: Position) -> Result<(), CameraError> {
		self.window
			.set_cursor_position(PhysicalPosition::new(position.x, position.y))
			.map_err(|e| CameraError::Cursor(e.to_string()))?;
		*self.position = position;
		Ok(())
	}
}

struct Walk {
	settings: CameraSettings,
	window: Option<Window>,
	camera: Option<FirstPersonCamera>,
	held: HashSet<KeyCode>,
	cursor: Position,
	last_frame: Instant,
	error: Option<Box<dyn Error>>,
}

impl Walk {
	fn new(settings: CameraSettings) -> Self {
		Self {
			settings,
			window: None,
			camera: None,
			held: HashSet::new(),
			cursor: Position::default(),
			last_frame: Instant::now(),
			error: None,
		}
	}

	fn fail(&mut self, event_loop: &ActiveEventLoop, err: Box<dyn Error>) {
		log::error!("{}", err);
		self.error = Some(err);
		event_loop.exit();
	}

	fn keys(&self) -> MovementKeys {
		MovementKeys::from_fn(|movement| {
			let (primary, alt) = match movement {
				Movement::Forward => (KeyCode::KeyW, KeyCode::ArrowUp),
				Movement::Back => (KeyCode::KeyS, KeyCode::ArrowDown),
				Movement::Left => (KeyCode::KeyA, KeyCode::ArrowLeft),
				Movement::Right => (KeyCode::KeyD, KeyCode::ArrowRight),
			};
			self.held.contains(&primary) || self.held.contains(&alt)
		})
	}

	fn frame(&mut self) -> Result<(), CameraError> {
		let keys = self.keys();
		let (window, camera) = match (self.window.as_ref(), self.camera.as_mut()) {
			(Some(window), Some(camera)) => (window, camera),
			_ => return Ok(()),
		};

		let now = Instant::now();
		let dt = now.duration_since(self.last_frame).as_secs_f32();
		self.last_frame = now;

		let center = camera.viewport().center();
		let mut cursor = WindowCursor {
			window,
			position: &mut self.cursor,
		};
		let mouse = sample_mouse(&mut cursor, center)?;

		camera.update(dt, &FrameInput::new(keys, mouse));
		if !keys.is_idle() || !mouse.is_zero() {
			let eye = camera.position();
			log::info!(
				"eye ({:.2}, {:.2}, {:.2}) yaw {:.3} pitch {:.3}",
				eye.x,
				eye.y,
				eye.z,
				camera.yaw(),
				camera.pitch()
			);
		}

		window.request_redraw();
		Ok(())
	}
}

impl ApplicationHandler for Walk {
	fn resumed(&mut self, event_loop: &ActiveEventLoop) {
		if self.window.is_some() {
			return;
		}

		let attributes = Window::default_attributes()
			.with_title("camrig walk")
			.with_inner_size(LogicalSize::new(WIDTH, HEIGHT));
		let window = match event_loop.create_window(attributes) {
			Ok(window) => window,
			Err(err) => return self.fail(event_loop, err.into()),
		};
		window.set_cursor_visible(false);

		let size = window.inner_size();
		let viewport = Viewport::new(size.width, size.height);
		match self.settings.first_person_camera(viewport) {
			Ok(camera) => {
				self.cursor = viewport.center();
				self.camera = Some(camera);
				self.window = Some(window);
				self.last_frame = Instant::now();
			}
			Err(err) => self.fail(event_loop, err.into()),
		}
	}

	fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
		match event {
			WindowEvent::CloseRequested => event_loop.exit(),
			WindowEvent::Resized(size) => {
				if let Some(camera) = self.camera.as_mut() {
					camera.resize(Viewport::new(size.width, size.height));
				}
			}
			WindowEvent::CursorMoved { position, .. } => {
				self.cursor = Position::new(position.x as i32, position.y as i32);
			}
			WindowEvent::KeyboardInput { event, .. } => {
				if let PhysicalKey::Code(code) = event.physical_key {
					if code == KeyCode::Escape {
						event_loop.exit();
						return;
					}
					match event.state {
						ElementState::Pressed => {
							self.held.insert(code);
						}
						ElementState::Released => {
							self.held.remove(&code);
						}
					}
				}
			}
			WindowEvent::RedrawRequested => {
				if let Err(err) = self.frame() {
					self.fail(event_loop, err.into());
				}
			}
			_ => {}
		}
	}
}

fn main() -> Result<(), Box<dyn Error>> {
	let _logger = Logger::try_with_env_or_str("info")?
		.format(colored_default_format)
		.start()?;

	let settings = match std::env::args().nth(1) {
		Some(path) => CameraSettings::load(std::path::Path::new(&path))?,
		None => CameraSettings::default(),
	};

	let event_loop = EventLoop::new()?;
	let mut app = Walk::new(settings);
	event_loop.run_app(&mut app)?;

	match app.error.take() {
		Some(err) => Err(err),
		None => Ok(()),
	}
}
