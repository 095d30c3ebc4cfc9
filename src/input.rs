use crate::error::CameraError;
use crate::geom::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
	Forward,
	Back,
	Left,
	Right,
}

/// Which movement keys are held for this frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MovementKeys {
	pub forward: bool,
	pub back: bool,
	pub left: bool,
	pub right: bool,
}

impl MovementKeys {
	pub fn none() -> Self {
		Default::default()
	}

	/// Build a snapshot by asking the input backend about each movement.
	pub fn from_fn<F>(mut held: F) -> Self
	where
		F: FnMut(Movement) -> bool,
	{
		Self {
			forward: held(Movement::Forward),
			back: held(Movement::Back),
			left: held(Movement::Left),
			right: held(Movement::Right),
		}
	}

	pub fn with(mut self, movement: Movement) -> Self {
		match movement {
			Movement::Forward => self.forward = true,
			Movement::Back => self.back = true,
			Movement::Left => self.left = true,
			Movement::Right => self.right = true,
		}
		self
	}

	pub fn is_held(&self, movement: Movement) -> bool {
		match movement {
			Movement::Forward => self.forward,
			Movement::Back => self.back,
			Movement::Left => self.left,
			Movement::Right => self.right,
		}
	}

	pub fn is_idle(&self) -> bool {
		!(self.forward || self.back || self.left || self.right)
	}
}

/// Cursor movement since the last sample, in pixels.
///
/// Both axes are measured as `previous - current`, so moving the mouse left
/// or up gives a positive delta.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MouseDelta {
	pub dx: i32,
	pub dy: i32,
}

impl MouseDelta {
	pub fn new(dx: i32, dy: i32) -> Self {
		Self { dx, dy }
	}

	pub fn between(previous: Position, current: Position) -> Self {
		Self {
			dx: previous.x - current.x,
			dy: previous.y - current.y,
		}
	}

	pub fn is_zero(&self) -> bool {
		self.dx == 0 && self.dy == 0
	}
}

/// Everything a first person camera reads from the input devices in one frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameInput {
	pub keys: MovementKeys,
	pub mouse: MouseDelta,
}

impl FrameInput {
	pub fn new(keys: MovementKeys, mouse: MouseDelta) -> Self {
		Self { keys, mouse }
	}

	pub fn idle() -> Self {
		Default::default()
	}
}

/// A pointer the camera can read and warp.
pub trait CursorDevice {
	fn cursor_position(&self) -> Position;
	fn set_cursor_position(&mut self, position: Position) -> Result<(), CameraError>;
}

/// Read the cursor relative to `center` and warp it back there, so the next
/// sample is again relative to the center rather than wherever the pointer drifted.
pub fn sample_mouse<C>(device: &mut C, center: Position) -> Result<MouseDelta, CameraError>
where
	C: CursorDevice + ?Sized,
{
	let delta = MouseDelta::between(center, device.cursor_position());
	device.set_cursor_position(center)?;
	Ok(delta)
}
