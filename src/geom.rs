/// Pixel coordinates on the render target, origin at the top left.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Position {
	pub x: i32,
	pub y: i32,
}

impl Position {
	pub fn new(x: i32, y: i32) -> Self {
		Self { x, y }
	}
}

/// Size of the render target the camera projects onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
	pub width: u32,
	pub height: u32,
}

impl Default for Viewport {
	fn default() -> Self {
		Self::new(1, 1)
	}
}

impl Viewport {
	pub fn new(width: u32, height: u32) -> Self {
		Self { width, height }
	}

	pub fn width(&self) -> u32 {
		self.width
	}

	pub fn height(&self) -> u32 {
		self.height
	}

	pub fn size(&self) -> (u32, u32) {
		(self.width, self.height)
	}

	pub fn is_empty(&self) -> bool {
		self.width == 0 || self.height == 0
	}

	/// Width over height. An empty viewport reports 1.0 rather than a NaN or infinite ratio.
	pub fn aspect_ratio(&self) -> f32 {
		if self.is_empty() {
			return 1.0;
		}
		self.width as f32 / self.height as f32
	}

	pub fn center(&self) -> Position {
		Position::new((self.width / 2) as i32, (self.height / 2) as i32)
	}
}
